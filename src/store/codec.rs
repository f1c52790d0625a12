//! Record encoding - how experiment records are framed in the world state.

use crate::record::VaccineExperiment;
use crate::{Error, Result};

/// Encoding applied to a record on its way to and from the backend.
///
/// Experiment records are repetitive on the wire (field tags recur for
/// every researcher and conclusion), so LZ4 framing pays off when the
/// hosting platform bounds or bills value size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordEncoding {
    /// Field-tagged JSON, as-is.
    #[default]
    Json,
    /// JSON wrapped in a size-prepended LZ4 frame.
    #[cfg(feature = "compression")]
    Lz4Json,
}

impl RecordEncoding {
    /// Encode a record to the bytes stored in the world state.
    pub(super) fn encode(self, experiment: &VaccineExperiment) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(experiment).map_err(Error::Serialize)?;
        match self {
            Self::Json => Ok(json),
            #[cfg(feature = "compression")]
            Self::Lz4Json => Ok(lz4_flex::compress_prepend_size(&json)),
        }
    }

    /// Decode stored bytes back into a record.
    ///
    /// Bad framing and bad JSON both surface as [`Error::CorruptRecord`]
    /// for `key`; the stored value is never repaired or defaulted.
    pub(super) fn decode(self, key: &str, bytes: &[u8]) -> Result<VaccineExperiment> {
        match self {
            Self::Json => decode_json(key, bytes),
            #[cfg(feature = "compression")]
            Self::Lz4Json => {
                let json =
                    lz4_flex::decompress_size_prepended(bytes).map_err(|source| {
                        Error::CorruptRecord {
                            key: key.to_string(),
                            source: Box::new(source),
                        }
                    })?;
                decode_json(key, &json)
            }
        }
    }
}

fn decode_json(key: &str, bytes: &[u8]) -> Result<VaccineExperiment> {
    serde_json::from_slice(bytes).map_err(|source| Error::CorruptRecord {
        key: key.to_string(),
        source: Box::new(source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{parse_date, Person};

    fn sample() -> VaccineExperiment {
        let mut experiment = VaccineExperiment::new(
            "International Medical Laboratory",
            "Testing vaccine for coronavirus",
            Person::new("John", "Smith", "1"),
            "VAC-COV-1",
            "COVID-19",
            parse_date("2020-Feb-03").unwrap(),
            parse_date("2020-May-20").unwrap(),
        );
        for _ in 0..8 {
            experiment.push_researcher(Person::new("Helena", "Gardner", "5"));
        }
        experiment
    }

    #[test]
    fn test_json_round_trip() {
        let experiment = sample();
        let bytes = RecordEncoding::Json.encode(&experiment).unwrap();
        let decoded = RecordEncoding::Json.decode("EXP0", &bytes).unwrap();
        assert_eq!(experiment, decoded);
    }

    #[test]
    fn test_json_garbage_is_corrupt() {
        let err = RecordEncoding::Json.decode("EXP0", b"garbage").unwrap_err();
        match err {
            Error::CorruptRecord { key, .. } => assert_eq!(key, "EXP0"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "compression")]
    #[test]
    fn test_lz4_round_trip_shrinks_repetitive_records() {
        let experiment = sample();
        let json = RecordEncoding::Json.encode(&experiment).unwrap();
        let framed = RecordEncoding::Lz4Json.encode(&experiment).unwrap();

        assert!(framed.len() < json.len());
        let decoded = RecordEncoding::Lz4Json.decode("EXP0", &framed).unwrap();
        assert_eq!(experiment, decoded);
    }

    #[cfg(feature = "compression")]
    #[test]
    fn test_lz4_rejects_unframed_bytes() {
        let json = RecordEncoding::Json.encode(&sample()).unwrap();
        assert!(matches!(
            RecordEncoding::Lz4Json.decode("EXP0", &json),
            Err(Error::CorruptRecord { .. })
        ));
    }
}
