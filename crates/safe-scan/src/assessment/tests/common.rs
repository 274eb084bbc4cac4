use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::assessment::catalog::{default_answers, keys};
use crate::assessment::domain::{
    AnswerSet, AnswerValue, AssessmentId, AssessmentRecord, PhotoRef, RecordMetadata,
};
use crate::assessment::repository::{MemorySlots, SlotStorage};

pub(super) fn answers_with(overrides: &[(&str, AnswerValue)]) -> AnswerSet {
    overrides
        .iter()
        .fold(default_answers(), |answers, (key, value)| {
            answers.with(*key, value.clone())
        })
}

/// wallCracks=Major, ventilation=Inadequate.
pub(super) fn yellow_answers() -> AnswerSet {
    answers_with(&[
        (keys::WALL_CRACKS, AnswerValue::Major),
        (keys::VENTILATION, AnswerValue::Inadequate),
    ])
}

/// groundShift, floodHistory, blockedExit and overcapacity all Major.
pub(super) fn red_answers() -> AnswerSet {
    answers_with(&[
        (keys::GROUND_SHIFT, AnswerValue::Major),
        (keys::FLOOD_HISTORY, AnswerValue::Major),
        (keys::BLOCKED_EXIT, AnswerValue::Major),
        (keys::OVERCAPACITY, AnswerValue::Major),
    ])
}

pub(super) fn at_minute(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 14, 9, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn metadata(room: &str) -> RecordMetadata {
    RecordMetadata {
        school: "SMPN 3 Pangkalan Kerinci".to_string(),
        room: room.to_string(),
        assessor: "OSIS safety team".to_string(),
        notes: format!("walkthrough of {room}"),
    }
}

pub(super) fn record(suffix: &str, answers: AnswerSet) -> AssessmentRecord {
    AssessmentRecord::freeze(
        AssessmentId(format!("assessment-{suffix}")),
        metadata(&format!("Class {suffix}")),
        answers,
        vec![PhotoRef(format!("blob:photos/{suffix}-1"))],
        at_minute(0),
    )
}

/// One record of each status, most recent first: red, green, yellow, green.
pub(super) fn mixed_records() -> Vec<AssessmentRecord> {
    vec![
        record("9A", red_answers()),
        record("9B", default_answers()),
        record("Lab", yellow_answers()),
        record("Library", default_answers()),
    ]
}

pub(super) struct UnavailableSlots;

impl SlotStorage for UnavailableSlots {
    fn read(&self, _slot: &str) -> io::Result<Option<String>> {
        Err(io::Error::other("disk offline"))
    }

    fn write(&self, _slot: &str, _contents: &str) -> io::Result<()> {
        Err(io::Error::other("disk offline"))
    }

    fn remove(&self, _slot: &str) -> io::Result<()> {
        Err(io::Error::other("disk offline"))
    }
}

/// Memory-backed slots whose reads can be switched to fail after data has been written.
#[derive(Clone, Default)]
pub(super) struct FlakyReadSlots {
    inner: MemorySlots,
    reads_fail: Arc<AtomicBool>,
}

impl FlakyReadSlots {
    pub(super) fn fail_reads(&self) {
        self.reads_fail.store(true, Ordering::SeqCst);
    }

    pub(super) fn restore_reads(&self) {
        self.reads_fail.store(false, Ordering::SeqCst);
    }
}

impl SlotStorage for FlakyReadSlots {
    fn read(&self, slot: &str) -> io::Result<Option<String>> {
        if self.reads_fail.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read denied"));
        }
        self.inner.read(slot)
    }

    fn write(&self, slot: &str, contents: &str) -> io::Result<()> {
        self.inner.write(slot, contents)
    }

    fn remove(&self, slot: &str) -> io::Result<()> {
        self.inner.remove(slot)
    }
}
