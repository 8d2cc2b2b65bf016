use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A letter as persisted under the letters key.
///
/// `created` is milliseconds since the Unix epoch, assigned once when the
/// letter is written. Fields default when missing so older or hand-edited
/// data still loads; a fractional `created` is truncated to whole
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, deserialize_with = "millis")]
    pub created: i64,
}

fn millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64))
            .unwrap_or_default(),
        _ => 0,
    })
}

impl Letter {
    /// Builds a letter from raw form input. Returns `None` when either field
    /// is empty after trimming.
    pub fn compose(title: &str, body: &str, created: i64) -> Option<Self> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() || body.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            body: body.to_string(),
            created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_trims_and_rejects_blank_fields() {
        let letter = Letter::compose("  Hi ", "\tThere\n", 5).unwrap();
        assert_eq!(letter.title, "Hi");
        assert_eq!(letter.body, "There");
        assert_eq!(letter.created, 5);

        assert!(Letter::compose("   ", "body", 1).is_none());
        assert!(Letter::compose("title", "", 1).is_none());
    }

    #[test]
    fn fractional_or_missing_timestamps_still_load() {
        let letters: Vec<Letter> = serde_json::from_str(
            r#"[{"title":"A","body":"x"},{"title":"B","body":"y","created":1700000000000.0,"mood":"happy"}]"#,
        )
        .unwrap();
        assert_eq!(letters.len(), 2);
        assert_eq!(letters[0].created, 0);
        assert_eq!(letters[1].created, 1_700_000_000_000);
    }

    #[test]
    fn serializes_with_stable_field_order() {
        let letter = Letter::compose("Hi", "There", 1700000000000).unwrap();
        assert_eq!(
            serde_json::to_string(&letter).unwrap(),
            r#"{"title":"Hi","body":"There","created":1700000000000}"#
        );
    }
}
