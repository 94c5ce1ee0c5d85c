//! CSV encoding of one act's townsfolk.
//!
//! Format, one row per entity after a fixed header:
//!
//! ```text
//! Type,X,Y,Dialogue
//! Knight,3,5,"Honor and valor guide my blade!"
//! ```
//!
//! The dialogue column is always quoted with embedded quotes doubled; the
//! other columns are written bare. Decoding is lenient: rows that cannot be
//! understood are skipped and reported, never fatal.
use arrayvec::ArrayVec;

use crate::catalog::TypeId;
use crate::grid::{GridDimensions, Position};
use crate::state::{Act, PlacedEntity};

pub const CSV_HEADER: &str = "Type,X,Y,Dialogue";

const FIELD_COUNT: usize = 4;

/// Why a data row was skipped during import.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("expected 4 fields, found {found}")]
    MissingFields { found: usize },

    #[error("unknown townsfolk type {0:?}")]
    UnknownType(String),

    #[error("coordinate {0:?} is not an integer")]
    InvalidCoordinate(String),

    #[error("position {position} is outside the grid")]
    OutOfBounds { position: Position },
}

/// A row that was dropped, with its 1-based line number in the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: RowError,
}

/// An accepted row, not yet bound to an entity id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedRow {
    pub type_id: TypeId,
    pub position: Position,
    /// Set only when the text differs from the archetype default.
    pub custom_dialogue: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeReport {
    pub rows: Vec<DecodedRow>,
    pub skipped: Vec<SkippedRow>,
}

/// File name an act is exported under.
pub fn export_file_name(act: Act) -> String {
    format!("town-act{}-dialogue.csv", act.number())
}

/// Serializes entities in iteration order. Rows are joined with `\n` and the
/// text has no trailing newline.
pub fn encode<'a, I>(entities: I) -> String
where
    I: IntoIterator<Item = &'a PlacedEntity>,
{
    let mut out = String::from(CSV_HEADER);
    for entity in entities {
        out.push('\n');
        out.push_str(entity.name());
        out.push(',');
        out.push_str(&entity.position.x.to_string());
        out.push(',');
        out.push_str(&entity.position.y.to_string());
        out.push_str(",\"");
        out.push_str(&entity.effective_dialogue().replace('"', "\"\""));
        out.push('"');
    }
    out
}

/// Parses CSV text produced by [`encode`] (or edited by hand).
///
/// Blank lines are ignored and the first remaining line is treated as the
/// header regardless of its content.
pub fn decode(text: &str, grid: GridDimensions) -> DecodeReport {
    let mut report = DecodeReport::default();

    let data_lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1);

    for (index, line) in data_lines {
        match decode_row(line, grid) {
            Ok(row) => report.rows.push(row),
            Err(reason) => report.skipped.push(SkippedRow {
                line: index + 1,
                reason,
            }),
        }
    }

    report
}

fn decode_row(line: &str, grid: GridDimensions) -> Result<DecodedRow, RowError> {
    let fields = split_fields(line);
    if fields.len() < FIELD_COUNT {
        return Err(RowError::MissingFields {
            found: fields.len(),
        });
    }

    let type_id =
        TypeId::from_name(&fields[0]).ok_or_else(|| RowError::UnknownType(fields[0].clone()))?;
    let position = Position::new(parse_coordinate(&fields[1])?, parse_coordinate(&fields[2])?);
    if !grid.contains(position) {
        return Err(RowError::OutOfBounds { position });
    }

    let dialogue = &fields[3];
    let custom_dialogue =
        (dialogue != type_id.entity_type().default_dialogue()).then(|| dialogue.clone());

    Ok(DecodedRow {
        type_id,
        position,
        custom_dialogue,
    })
}

fn parse_coordinate(raw: &str) -> Result<i32, RowError> {
    raw.trim()
        .parse()
        .map_err(|_| RowError::InvalidCoordinate(raw.to_string()))
}

/// Splits a line into at most four unescaped fields.
///
/// A field is either a double-quoted run (with `""` standing for a literal
/// quote) or a run of non-comma characters. Empty bare fields produce
/// nothing, so `a,,b` yields two fields.
fn split_fields(line: &str) -> ArrayVec<String, FIELD_COUNT> {
    let mut fields = ArrayVec::new();
    let mut chars = line.chars().peekable();

    while !fields.is_full() {
        match chars.peek() {
            None => break,
            Some(',') => {
                chars.next();
            }
            Some('"') => {
                chars.next();
                let mut field = String::new();
                while let Some(ch) = chars.next() {
                    if ch == '"' {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            field.push('"');
                        } else {
                            break;
                        }
                    } else {
                        field.push(ch);
                    }
                }
                // Anything between the closing quote and the next comma is noise.
                while chars.next_if(|ch| *ch != ',').is_some() {}
                fields.push(field);
            }
            Some(_) => {
                let mut raw = String::new();
                while let Some(ch) = chars.next_if(|ch| *ch != ',') {
                    raw.push(ch);
                }
                fields.push(unquote_bare(&raw));
            }
        }
    }

    fields
}

fn unquote_bare(raw: &str) -> String {
    let trimmed = raw.strip_prefix('"').unwrap_or(raw);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.replace("\"\"", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityId;

    fn entity(id: u64, name: &str, x: i32, y: i32) -> PlacedEntity {
        PlacedEntity::new(
            EntityId(id),
            Position::new(x, y),
            TypeId::from_name(name).unwrap(),
        )
    }

    #[test]
    fn encodes_header_and_quoted_dialogue() {
        let rows = [
            entity(1, "Knight", 3, 5),
            entity(2, "Merchant", 10, 2).with_dialogue("Say \"hi\", friend"),
        ];
        assert_eq!(
            encode(&rows),
            "Type,X,Y,Dialogue\n\
             Knight,3,5,\"Honor and valor guide my blade!\"\n\
             Merchant,10,2,\"Say \"\"hi\"\", friend\""
        );
    }

    #[test]
    fn empty_act_encodes_header_only() {
        assert_eq!(encode(&[] as &[PlacedEntity]), CSV_HEADER);
    }

    #[test]
    fn split_handles_quotes_and_commas() {
        let fields = split_fields(r#"Knight,1,2,"He said, ""hello""""#);
        assert_eq!(fields.as_slice(), ["Knight", "1", "2", r#"He said, "hello""#]);
    }

    #[test]
    fn split_skips_empty_bare_fields_and_caps_at_four() {
        assert_eq!(split_fields("Knight,,5,\"x\"").len(), 3);
        let fields = split_fields("a,b,c,d,e");
        assert_eq!(fields.as_slice(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn split_keeps_empty_quoted_field() {
        let fields = split_fields("Knight,1,2,\"\"");
        assert_eq!(fields.as_slice(), ["Knight", "1", "2", ""]);
    }

    #[test]
    fn unterminated_quote_takes_rest_of_line() {
        let fields = split_fields("Knight,1,2,\"open, never closed");
        assert_eq!(fields[3], "open, never closed");
    }

    #[test]
    fn decode_skips_blank_lines_and_header() {
        let text = "\n  \nType,X,Y,Dialogue\n\nKnight,1,1,\"Honor and valor guide my blade!\"\n";
        let report = decode(text, GridDimensions::TOWN);
        assert!(report.skipped.is_empty());
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].custom_dialogue, None);
    }

    #[test]
    fn decode_reports_bad_rows_with_line_numbers() {
        let text = "Type,X,Y,Dialogue\n\
                    Dragon,1,1,\"Roar\"\n\
                    Knight,1\n\
                    Knight,one,1,\"x\"\n\
                    Knight,40,1,\"x\"\n\
                    Queen,5,5,\"custom text\"";
        let report = decode(text, GridDimensions::TOWN);

        let reasons: Vec<_> = report.skipped.iter().map(|s| (s.line, &s.reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (2, &RowError::UnknownType("Dragon".into())),
                (3, &RowError::MissingFields { found: 2 }),
                (4, &RowError::InvalidCoordinate("one".into())),
                (
                    5,
                    &RowError::OutOfBounds {
                        position: Position::new(40, 1)
                    }
                ),
            ]
        );
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].custom_dialogue.as_deref(), Some("custom text"));
    }

    #[test]
    fn decode_accepts_crlf_line_endings() {
        let text = "Type,X,Y,Dialogue\r\nGuard,0,14,\"Halt!\"\r\n";
        let report = decode(text, GridDimensions::TOWN);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].position, Position::new(0, 14));
        assert_eq!(report.rows[0].custom_dialogue.as_deref(), Some("Halt!"));
    }

    #[test]
    fn header_only_and_empty_text_decode_to_nothing() {
        assert_eq!(decode("", GridDimensions::TOWN), DecodeReport::default());
        assert_eq!(decode(CSV_HEADER, GridDimensions::TOWN), DecodeReport::default());
    }

    #[test]
    fn export_name_uses_act_number() {
        assert_eq!(export_file_name(Act::Two), "town-act2-dialogue.csv");
    }
}
