// Mapping between the `music_info` table rows and domain records

use chrono::{DateTime, Utc};
use entities::music_info;
use sea_orm::ActiveValue::Set;

use super::models::{PracticeRecord, Progress};
use crate::error::StoreError;

/// Rows are validated on the way out; an out-of-range progress is reported, never clamped.
pub fn map_row_to_record(row: music_info::Model) -> Result<PracticeRecord, StoreError> {
    let id = row.id;
    let corrupt = |source| StoreError::Corrupt { id, source };
    let right_hand_progress =
        Progress::new(i64::from(row.right_hand_progress)).map_err(corrupt)?;
    let left_hand_progress = Progress::new(i64::from(row.left_hand_progress)).map_err(corrupt)?;

    Ok(PracticeRecord {
        id: row.id,
        title: row.title,
        artist: row.artist,
        memo: row.memo,
        right_hand_progress,
        left_hand_progress,
    })
}

pub fn map_record_to_active(record: PracticeRecord, created_at: DateTime<Utc>) -> music_info::ActiveModel {
    music_info::ActiveModel {
        id: Set(record.id),
        title: Set(record.title),
        artist: Set(record.artist),
        memo: Set(record.memo),
        right_hand_progress: Set(i32::from(record.right_hand_progress.value())),
        left_hand_progress: Set(i32::from(record.left_hand_progress.value())),
        created_at: Set(created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use uuid::Uuid;

    fn row(right: i32, left: i32) -> music_info::Model {
        music_info::Model {
            id: Uuid::now_v7(),
            title: "Nocturne Op.9 No.2".into(),
            artist: "Chopin".into(),
            memo: "left hand arpeggios".into(),
            right_hand_progress: right,
            left_hand_progress: left,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn valid_row_maps_to_record() {
        let row = row(40, 10);
        let id = row.id;
        let record = map_row_to_record(row).unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.artist, "Chopin");
        assert_eq!(record.right_hand_progress.value(), 40);
        assert_eq!(record.left_hand_progress.value(), 10);
    }

    #[test]
    fn out_of_range_row_is_corrupt() {
        let row = row(137, 0);
        let id = row.id;
        assert_eq!(
            map_row_to_record(row),
            Err(StoreError::Corrupt {
                id,
                source: RecordError::InvalidRange { value: 137 }
            })
        );
    }

    #[test]
    fn record_maps_to_active_model() {
        let record = PracticeRecord::new("Canon", "Pachelbel", "")
            .with_progress(100, 55)
            .unwrap();
        let active = map_record_to_active(record.clone(), Utc::now());
        assert_eq!(active.id, Set(record.id));
        assert_eq!(active.right_hand_progress, Set(100));
        assert_eq!(active.left_hand_progress, Set(55));
    }
}
