//! Compiled-in catalog descriptors, grouped by category.

pub mod galaxy;
pub mod infrared;
pub mod nebula;
pub mod others;
pub mod quasar;
pub mod radio;
pub mod star;
pub mod user;
pub mod variable;
pub mod xray;

use crate::catalog::descriptor::CatalogDescriptor;

/// Every built-in descriptor in registration order.
pub static BUILTIN: &[&dyn CatalogDescriptor] = &[
    // variable stars
    &variable::GCVS,
    &variable::NSV,
    &variable::NSVS,
    &variable::MISV,
    &variable::ASAS,
    &variable::ROTSE1,
    &variable::SVS,
    &variable::TASS,
    &user::USER_VARIABLE,
    // x-ray
    &xray::ROSAT_BRIGHT,
    &xray::RX,
    &xray::WGA,
    &xray::XMMSL1,
    &xray::EINSTEIN_2E,
    &xray::HEAO_1H,
    &xray::UHURU_4U,
    &xray::EINSTEIN_1ES,
    // infrared
    &infrared::IRAS_PSC,
    &infrared::IRAS_FSC,
    &infrared::TWO_MASS,
    &infrared::TWO_MASX,
    &infrared::DENIS,
    &infrared::WISE,
    &infrared::AKARI_IRC,
    &infrared::AKARI_FIS,
    &infrared::MSX6C,
    &infrared::AFGL,
    &infrared::IRC,
    // radio
    &radio::NVSS,
    &radio::FIRST,
    &radio::PKS,
    &radio::THIRD_CAMBRIDGE,
    &radio::FOURTH_CAMBRIDGE,
    // galaxies
    &galaxy::UGC,
    &galaxy::UGCA,
    &galaxy::PGC,
    &galaxy::MRK,
    &galaxy::ARP,
    &galaxy::VV,
    &galaxy::MCG,
    &galaxy::ESO,
    &galaxy::CGCG,
    &galaxy::KUG,
    // quasars
    &quasar::PG,
    &quasar::KUV,
    &quasar::HS,
    &quasar::HE,
    &quasar::SBS,
    &quasar::FBS,
    &quasar::EC,
    &quasar::SDSS,
    &quasar::TWO_QZ,
    &quasar::HQS,
    &quasar::BPS,
    &quasar::TON,
    &quasar::LB,
    &quasar::US,
    // clusters and nebulae
    &nebula::NGC,
    &nebula::IC,
    &nebula::ACO,
    &nebula::VDB,
    &nebula::LBN,
    &nebula::LDN,
    &nebula::BARNARD,
    &nebula::MESSIER,
    &nebula::COLLINDER,
    &nebula::TRUMPLER,
    &nebula::MELOTTE,
    &nebula::BERKELEY,
    &nebula::KING,
    &nebula::STOCK,
    &nebula::SH2,
    &nebula::PK,
    &nebula::PN_G,
    // stars
    &star::HIP,
    &star::HD,
    &star::HDE,
    &star::SAO,
    &star::LHS,
    &star::LTT,
    &star::ROSS,
    &star::WOLF,
    &star::GD,
    &star::HZ,
    &star::TYC,
    &star::GSC,
    &star::USNO_A2,
    &star::BD,
    &star::CD,
    &star::CPD,
    &star::LP,
    &star::GICLAS,
    &star::WD,
    // others
    &others::A64,
    &others::STHA,
    &others::MWC,
    &others::CSS,
    &others::HBHA,
    &user::USER_OBJECT,
];
