use tx_core::ProfileRecord;

/// Outcome of loading a profile.
///
/// Loading never fails: a missing or unparseable stored value yields the
/// default record. `recovered_from` carries the parse error text when
/// corrupt data was masked, so callers can tell "fresh" from "recovered"
/// without treating either as an error.
#[derive(Debug, Clone, Default)]
pub struct LoadedProfile {
    pub record: ProfileRecord,
    pub recovered_from: Option<String>,
}

impl LoadedProfile {
    pub fn was_recovered(&self) -> bool {
        self.recovered_from.is_some()
    }
}
