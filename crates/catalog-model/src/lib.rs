pub mod filter;
pub mod record;
pub mod view;

pub use filter::{FilterState, OrphanChoice};
pub use record::{OrphanFlag, Record, RecordId};
pub use view::{SelectOutcome, ViewState};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            id: RecordId(3),
            drug_name: "Low-dose naltrexone".to_string(),
            disease: "ME/CFS".to_string(),
            orphan: OrphanFlag::No,
            category: "StuffThatWorks".to_string(),
            total_score: "8.5".to_string(),
            one_pager: None,
            studies: Some("Two open-label trials.".to_string()),
        }
    }

    #[test]
    fn optional_text_falls_back_to_placeholder() {
        let record = sample_record();
        assert_eq!(record.one_pager_text(), "No 1-Pager available.");
        assert_eq!(record.studies_text(), "Two open-label trials.");
    }

    #[test]
    fn record_serializes() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: Record = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round.id, record.id);
        assert_eq!(round.category, record.category);
    }
}
