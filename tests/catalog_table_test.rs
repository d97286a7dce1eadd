use sky_catalog::catalog::{CatalogDescriptor, CatalogEntry, DescriptorRegistry};
use sky_catalog::pipeline::PersistedEntry;
use sky_catalog::CatalogError;

/// One valid raw record per built-in catalog.
fn sample(code: &str) -> Option<&'static [&'static str]> {
    let values: &[&str] = match code {
        "GCVS" => &["SS", "Cyg"],
        "NSV" => &["12345"],
        "NSVS" => &["1234567"],
        "MisV" => &["1234"],
        "ASAS" => &["123456", "+1234.5"],
        "SVS" | "TASS" | "AFGL" => &["1234"],
        "User Variable" => &["Nova Sco 2025"],
        "User Object" => &["Comet-like blob"],
        "ROTSE1" | "SDSS" | "2QZ" => &["123456.78", "+123456.7"],
        "1RXS" | "RX" | "WGA" | "XMMSL1" | "NVSS" | "FIRST" => &["123456.7", "+123456"],
        "2E" => &["1234.5", "+1234"],
        "1H" | "1ES" | "KUG" | "KUV" | "HBHA" => &["1234", "+123"],
        "4U" => &["1700", "-377"],
        "IRAS PSC" | "IRAS FSC" => &["12345", "+1234"],
        "2MASS" | "2MASX" | "DENIS" | "WISE" | "AKARI-IRC" | "AKARI-FIS" => {
            &["12345678", "+1234567"]
        }
        "MSX6C" => &["123.4567", "+01.2345"],
        "IRC" => &["+10", "216"],
        "PKS" => &["1234", "-123"],
        "3C" => &["273"],
        "4C" => &["+12", "34"],
        "UGC" | "UGCA" | "PGC" | "Mrk" | "Arp" | "VV" => &["123"],
        "MCG" => &["+05", "12", "034"],
        "ESO" => &["123", "G45"],
        "CGCG" => &["097", "073"],
        "PG" => &["1159", "-035"],
        "HS" | "HE" | "SBS" | "FBS" | "EC" => &["1234", "+1234"],
        "HQS" => &["H199", "00123"],
        "BPS" => &["CS", "22892-052"],
        "Ton" | "LB" | "US" | "StHA" | "MWC" | "CSS" => &["618"],
        "NGC" | "IC" | "ACO" | "vdB" | "LBN" | "LDN" | "B" => &["224"],
        "M" | "Cr" | "Tr" | "Mel" | "Be" | "King" | "Stock" => &["7"],
        "Sh2" => &["155"],
        "PK" => &["064", "+05", "1"],
        "PN G" => &["064.7", "+05.0"],
        "HIP" | "HD" | "HDE" | "SAO" | "LHS" | "LTT" | "Ross" | "Wolf" | "GD" | "HZ" => {
            &["71683"]
        }
        "TYC" => &["1234", "567", "1"],
        "GSC" => &["1234", "00567"],
        "USNO-A2.0" => &["0900", "01234567"],
        "BD" | "CD" | "CPD" => &["+12", "1234"],
        "LP" | "G" => &["123", "45"],
        "WD" => &["1337", "+705"],
        "[A64]" => &["AB", "01"],
        _ => return None,
    };
    Some(values)
}

fn sampled_entries() -> Vec<(&'static dyn CatalogDescriptor, CatalogEntry)> {
    DescriptorRegistry::builtin()
        .descriptors()
        .map(|descriptor| {
            let code = descriptor.catalog_code();
            let values = sample(code).unwrap_or_else(|| panic!("no sample record for {}", code));
            let entry = CatalogEntry::construct(descriptor, values)
                .unwrap_or_else(|e| panic!("{} sample rejected: {}", code, e));
            (descriptor, entry)
        })
        .collect()
}

#[test]
fn test_every_catalog_derives_its_sample() {
    for (descriptor, entry) in sampled_entries() {
        let code = descriptor.catalog_code();
        let path = entry
            .folder_path()
            .unwrap_or_else(|e| panic!("{} folder path failed: {}", code, e));

        assert!(path.len() >= 3, "{} has no catalog-specific folder", code);
        assert_eq!(path[0], descriptor.category().folder_name(), "{}", code);
        assert_eq!(path[1], descriptor.catalog_folder_code(), "{}", code);
        for segment in &path {
            assert!(!segment.is_empty(), "{} has an empty folder segment", code);
            assert!(!segment.contains('/'), "{} segment '{}' is not a path segment", code, segment);
        }

        let star = entry.star_folder().unwrap();
        assert!(!star.is_empty() && !star.contains(' '), "{} star folder '{}'", code, star);

        match entry.external_name() {
            Ok(name) => assert!(!name.is_empty(), "{}", code),
            Err(CatalogError::NoExternalName { .. }) => assert_eq!(code, "USNO-A2.0"),
            Err(e) => panic!("{} external name failed: {}", code, e),
        }
    }
}

#[test]
fn test_derivations_are_deterministic() {
    for (_, entry) in sampled_entries() {
        assert_eq!(entry.folder_path().unwrap(), entry.folder_path().unwrap());
        assert_eq!(entry.star_folder().unwrap(), entry.star_folder().unwrap());
        assert_eq!(
            entry.external_name().ok(),
            entry.clone().external_name().ok()
        );
    }
}

#[test]
fn test_persisted_form_rehydrates_every_catalog() {
    let registry = DescriptorRegistry::builtin();
    for (descriptor, entry) in sampled_entries() {
        let json = PersistedEntry::from_entry(&entry).to_json().unwrap();
        let restored = PersistedEntry::from_json(&json)
            .unwrap()
            .rehydrate(registry)
            .unwrap();

        assert_eq!(restored, entry, "{}", descriptor.catalog_code());
        assert_eq!(restored.folder_path().unwrap(), entry.folder_path().unwrap());
        assert_eq!(restored.star_folder().unwrap(), entry.star_folder().unwrap());
        assert_eq!(restored.external_name().ok(), entry.external_name().ok());
    }
}

#[test]
fn test_surplus_fields_are_rejected() {
    for (descriptor, _) in sampled_entries() {
        let too_many: Vec<String> = (0..=descriptor.layout().len()).map(|i| i.to_string()).collect();
        assert!(
            matches!(
                CatalogEntry::construct(descriptor, &too_many),
                Err(CatalogError::TooManyFields { .. })
            ),
            "{}",
            descriptor.catalog_code()
        );
    }
}
