use crate::config::{NarrativeConfig, TabularConfig};
use crate::narrative::FlowingCompositor;
use crate::tabular::{Group, SubItem, TabularCompositor};
use chrono::NaiveDate;
use folio_render_core::{RecordingBackend, TextRun};

/// Composes `lines` with the default geometry on a fixed-advance backend.
pub fn compose_narrative<S: AsRef<str>>(lines: &[S]) -> RecordingBackend {
    let _ = env_logger::builder().is_test(true).try_init();
    FlowingCompositor::new(NarrativeConfig::default())
        .compose(RecordingBackend::new(), lines)
        .expect("recording backend does not fail")
        .into_backend()
}

pub fn compose_report(groups: &[Group]) -> Option<RecordingBackend> {
    let _ = env_logger::builder().is_test(true).try_init();
    TabularCompositor::new(TabularConfig::default())
        .compose(RecordingBackend::new(), groups)
        .expect("recording backend does not fail")
        .map(|doc| doc.into_backend())
}

pub fn runs_on(backend: &RecordingBackend, page: usize) -> Vec<TextRun> {
    backend.pages()[page].text_runs().cloned().collect()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn group(name: &str, day: u32, amount: f64, staff: &[(&str, &str)]) -> Group {
    Group {
        name: name.to_string(),
        counterpart: format!("Cliente {}", name),
        date: date(2024, 3, day),
        amount,
        sub_items: staff
            .iter()
            .map(|(name, identifier)| SubItem {
                name: name.to_string(),
                identifier: identifier.to_string(),
            })
            .collect(),
    }
}
