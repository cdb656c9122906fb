use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A semantic role a dataset column can play, independent of how the
/// source spreadsheet actually named its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Title,
    Org,
    Area,
    Industry,
    Deadline,
    Duration,
    Paid,
    Link,
    Desc,
}

impl LogicalField {
    pub const ALL: [LogicalField; 9] = [
        LogicalField::Title,
        LogicalField::Org,
        LogicalField::Area,
        LogicalField::Industry,
        LogicalField::Deadline,
        LogicalField::Duration,
        LogicalField::Paid,
        LogicalField::Link,
        LogicalField::Desc,
    ];

    /// Canonical key used when the dataset supplies no hint for this field.
    pub fn default_key(self) -> &'static str {
        match self {
            LogicalField::Title => "_title",
            LogicalField::Org => "_org",
            LogicalField::Area => "_area",
            LogicalField::Industry => "_industry",
            LogicalField::Deadline => "_deadline",
            LogicalField::Duration => "_duration",
            LogicalField::Paid => "_paid",
            LogicalField::Link => "_link",
            LogicalField::Desc => "_desc",
        }
    }

    /// Key under `meta.detected` that names this field's source column.
    fn hint_key(self) -> &'static str {
        match self {
            LogicalField::Title => "title_col",
            LogicalField::Org => "org_col",
            LogicalField::Area => "area_col",
            LogicalField::Industry => "industry_col",
            LogicalField::Deadline => "deadline_col",
            LogicalField::Duration => "duration_col",
            LogicalField::Paid => "paid_col",
            LogicalField::Link => "link_col",
            LogicalField::Desc => "desc_col",
        }
    }
}

/// Per-dataset mapping from logical field to the concrete record key that
/// holds it. Supplied once at load time and passed explicitly to every
/// consumer; an absent hint falls back to the canonical default key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldHints {
    pub title: Option<String>,
    pub org: Option<String>,
    pub area: Option<String>,
    pub industry: Option<String>,
    pub deadline: Option<String>,
    pub duration: Option<String>,
    pub paid: Option<String>,
    pub link: Option<String>,
    pub desc: Option<String>,
}

impl FieldHints {
    /// Build hints from a `meta.detected` JSON value, field by field.
    /// Anything that is not a non-empty string entry in an object is
    /// ignored rather than rejected, so a malformed block degrades to
    /// default keys instead of failing the load.
    pub fn from_detected(value: &Value) -> FieldHints {
        let mut hints = FieldHints::default();

        match value.as_object() {
            Some(detected) => {
                for field in LogicalField::ALL {
                    let col = detected
                        .get(field.hint_key())
                        .and_then(Value::as_str)
                        .map(str::trim)
                        .filter(|col| !col.is_empty());

                    if let Some(col) = col {
                        hints.set(field, col.to_string());
                    }
                }
            }
            None => {
                if !value.is_null() {
                    log::warn!("ignoring malformed detected block: {}", value);
                }
            }
        }

        hints
    }

    /// The hint for a logical field, if one was supplied.
    pub fn get(&self, field: LogicalField) -> Option<&str> {
        match field {
            LogicalField::Title => self.title.as_deref(),
            LogicalField::Org => self.org.as_deref(),
            LogicalField::Area => self.area.as_deref(),
            LogicalField::Industry => self.industry.as_deref(),
            LogicalField::Deadline => self.deadline.as_deref(),
            LogicalField::Duration => self.duration.as_deref(),
            LogicalField::Paid => self.paid.as_deref(),
            LogicalField::Link => self.link.as_deref(),
            LogicalField::Desc => self.desc.as_deref(),
        }
    }

    fn set(&mut self, field: LogicalField, col: String) {
        let slot = match field {
            LogicalField::Title => &mut self.title,
            LogicalField::Org => &mut self.org,
            LogicalField::Area => &mut self.area,
            LogicalField::Industry => &mut self.industry,
            LogicalField::Deadline => &mut self.deadline,
            LogicalField::Duration => &mut self.duration,
            LogicalField::Paid => &mut self.paid,
            LogicalField::Link => &mut self.link,
            LogicalField::Desc => &mut self.desc,
        };
        *slot = Some(col);
    }

    /// Resolve a logical field to the concrete record key to read: the
    /// hint when present and non-empty, the canonical default otherwise.
    /// Total - always yields a non-empty key, even if no record has it.
    pub fn resolve(&self, field: LogicalField) -> &str {
        match self.get(field) {
            Some(col) if !col.trim().is_empty() => col,
            _ => field.default_key(),
        }
    }
}

/// Lenient serde adapter for `meta.detected`.
pub(crate) fn lenient_hints<'de, D>(deserializer: D) -> Result<FieldHints, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(FieldHints::from_detected(&value))
}
