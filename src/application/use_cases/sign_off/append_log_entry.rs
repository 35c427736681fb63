use chrono::NaiveDateTime;

use crate::application::ports::sign_off_log::SignOffLog;

#[derive(thiserror::Error, Debug)]
pub enum AppendLogEntryError {
    #[error("name is required")]
    MissingName,
    #[error("could not write to the sign-off log")]
    Write(#[source] anyhow::Error),
}

pub fn format_log_entry(name: &str, at: NaiveDateTime) -> String {
    format!(
        "{} - {} has reviewed the Playbook and SOP.\n",
        at.format("%Y-%m-%d %H:%M:%S"),
        name
    )
}

/// Anonymous sign-off: appends one line per submission.
pub struct AppendLogEntry<'a, L: SignOffLog + ?Sized> {
    pub log: &'a L,
}

impl<'a, L: SignOffLog + ?Sized> AppendLogEntry<'a, L> {
    pub async fn execute(
        &self,
        name: Option<&str>,
        at: NaiveDateTime,
    ) -> Result<String, AppendLogEntryError> {
        let name = name.map(str::trim).unwrap_or("");
        if name.is_empty() {
            return Err(AppendLogEntryError::MissingName);
        }
        // One entry per line, whatever was typed.
        let name = name.replace(['\r', '\n'], " ");
        let line = format_log_entry(&name, at);
        self.log
            .append(&line)
            .await
            .map_err(AppendLogEntryError::Write)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FailingLog, MemoryLog};
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn formats_entry_line() {
        assert_eq!(
            format_log_entry("Akira Devonish", at()),
            "2025-03-14 09:05:07 - Akira Devonish has reviewed the Playbook and SOP.\n"
        );
    }

    #[tokio::test]
    async fn appends_trimmed_name() {
        let log = MemoryLog::default();
        AppendLogEntry { log: &log }
            .execute(Some("  Dale  "), at())
            .await
            .unwrap();
        assert_eq!(
            log.lines(),
            vec!["2025-03-14 09:05:07 - Dale has reviewed the Playbook and SOP.\n".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_name_writes_nothing() {
        let log = MemoryLog::default();
        let uc = AppendLogEntry { log: &log };
        assert!(matches!(
            uc.execute(None, at()).await.unwrap_err(),
            AppendLogEntryError::MissingName
        ));
        assert!(matches!(
            uc.execute(Some("   "), at()).await.unwrap_err(),
            AppendLogEntryError::MissingName
        ));
        assert!(log.lines().is_empty());
    }

    #[tokio::test]
    async fn reports_write_failures() {
        let err = AppendLogEntry { log: &FailingLog }
            .execute(Some("Roger"), at())
            .await
            .unwrap_err();
        assert!(matches!(err, AppendLogEntryError::Write(_)));
    }

    #[tokio::test]
    async fn newlines_in_name_stay_on_one_line() {
        let log = MemoryLog::default();
        AppendLogEntry { log: &log }
            .execute(Some("Terry\nBennett"), at())
            .await
            .unwrap();
        assert_eq!(log.lines()[0].matches('\n').count(), 1);
    }
}
