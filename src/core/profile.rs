//! Fixed values of the single-debtor, single-currency SEPA credit transfer
//! profile (pain.001.001.03).

/// Default namespace of the root `Document` element.
pub const PAIN_001_001_03_NS: &str = "urn:iso:std:iso:20022:tech:xsd:pain.001.001.03";

/// XML Schema instance namespace (`xmlns:xsi`).
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// `PmtMtd`: credit transfer.
pub const PAYMENT_METHOD: &str = "TRF";

/// `PmtTpInf/SvcLvl/Cd`.
pub const SERVICE_LEVEL: &str = "SEPA";

/// `ChrgBr`: charges follow the service level.
pub const CHARGE_BEARER: &str = "SLEV";

/// `RgltryRptg/Dtls/Cd` stamped on every transaction.
pub const REGULATORY_CODE: &str = "150";

/// `CreDtTm` layout, `YYYY-MM-DDTHH:MM:SS`.
pub const CREATION_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `ReqdExctnDt` layout, `YYYY-MM-DD`.
pub const EXECUTION_DATE_FORMAT: &str = "%Y-%m-%d";
