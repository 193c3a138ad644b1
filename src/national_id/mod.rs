mod danish_ssn;
mod finnish_ssn;
mod norwegian_ssn;
mod swedish_ssn;

pub use danish_ssn::{is_valid_danish_ssn, DanishSsn};
pub use finnish_ssn::{is_valid_finnish_ssn, FinnishSsn};
pub use norwegian_ssn::{
    diff_years, is_valid_norwegian_ssn, is_valid_norwegian_ssn_at, norwegian_age,
    norwegian_age_at, norwegian_birth_date, norwegian_id_number_type, IdNumberType,
    NorwegianSsn,
};
pub use swedish_ssn::{is_valid_swedish_ssn, SwedishSsn};
