use std::io::BufRead;

use namemap_config::MappingsConfig;
use namemap_descriptor::parse_method_descriptor;

use crate::bijection::{BijectionBuilder, Collision};
use crate::error::{MappingError, MappingTable, Result};
use crate::map::SymbolMap;
use crate::member::MemberReference;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Require both descriptors of every `MD:` record to be valid method descriptors.
    pub validate_descriptors: bool,
}

impl From<&MappingsConfig> for ParseOptions {
    fn from(config: &MappingsConfig) -> Self {
        Self {
            validate_descriptors: config.validate_descriptors,
        }
    }
}

/// Parse an SRG mapping stream with default options.
pub fn parse_srg<R: BufRead>(reader: R) -> Result<SymbolMap> {
    parse_srg_with(reader, ParseOptions::default())
}

pub fn parse_srg_str(text: &str) -> Result<SymbolMap> {
    parse_srg(text.as_bytes())
}

/// Parse an SRG mapping stream.
///
/// The whole input is consumed before the map is built; any error discards everything read so
/// far.
pub fn parse_srg_with<R: BufRead>(reader: R, options: ParseOptions) -> Result<SymbolMap> {
    let mut tables = TableBuilders::default();
    let mut ignored = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| MappingError::Read {
            line: line_no,
            source,
        })?;

        match parse_line(&line, line_no, options)? {
            Record::Class { human, mapped } => {
                let entry = format!("{human} -> {mapped}");
                tables.classes.insert(human, mapped).map_err(|collision| {
                    duplicate(line_no, MappingTable::Classes, collision, entry)
                })?;
            }
            Record::Field { human, mapped } => {
                let entry = format!("{human} -> {mapped}");
                tables.fields.insert(human, mapped).map_err(|collision| {
                    duplicate(line_no, MappingTable::Fields, collision, entry)
                })?;
            }
            Record::Method { human, mapped } => {
                let entry = format!("{human} -> {mapped}");
                tables.methods.insert(human, mapped).map_err(|collision| {
                    duplicate(line_no, MappingTable::Methods, collision, entry)
                })?;
            }
            Record::Ignored(tag) => {
                tracing::trace!(
                    target: "namemap.srg",
                    line = line_no,
                    tag,
                    "ignoring mapping record"
                );
                ignored += 1;
            }
        }
    }

    if ignored > 0 {
        tracing::debug!(target: "namemap.srg", ignored, "skipped records with unhandled tags");
    }

    Ok(tables.build())
}

#[derive(Default)]
struct TableBuilders {
    classes: BijectionBuilder<String, String>,
    fields: BijectionBuilder<MemberReference, MemberReference>,
    methods: BijectionBuilder<MemberReference, MemberReference>,
}

impl TableBuilders {
    fn build(self) -> SymbolMap {
        SymbolMap::from_tables(
            self.classes.build(),
            self.fields.build(),
            self.methods.build(),
        )
    }
}

enum Record<'a> {
    Class { human: String, mapped: String },
    Field { human: MemberReference, mapped: MemberReference },
    Method { human: MemberReference, mapped: MemberReference },
    Ignored(&'a str),
}

fn parse_line(line: &str, line_no: usize, options: ParseOptions) -> Result<Record<'_>> {
    let mut tokens = line.split_whitespace();
    let Some(tag) = tokens.next() else {
        return Err(malformed(line_no, "blank line"));
    };
    let operands: Vec<&str> = tokens.collect();

    match tag {
        "CL:" => {
            let [human, mapped] = operands_of::<2>(&operands, tag, line_no)?;
            Ok(Record::Class {
                human: human.replace('/', "."),
                mapped: mapped.replace('/', "."),
            })
        }
        "FD:" => {
            let [human, mapped] = operands_of::<2>(&operands, tag, line_no)?;
            Ok(Record::Field {
                human: member(human, None, line_no)?,
                mapped: member(mapped, None, line_no)?,
            })
        }
        "MD:" => {
            let [human, human_desc, mapped, mapped_desc] =
                operands_of::<4>(&operands, tag, line_no)?;
            if options.validate_descriptors {
                for desc in [human_desc, mapped_desc] {
                    parse_method_descriptor(desc)
                        .map_err(|err| malformed(line_no, err.to_string()))?;
                }
            }
            Ok(Record::Method {
                human: member(human, Some(human_desc), line_no)?,
                mapped: member(mapped, Some(mapped_desc), line_no)?,
            })
        }
        // `PK:` and anything newer.
        _ => Ok(Record::Ignored(tag)),
    }
}

fn operands_of<'a, const N: usize>(
    operands: &[&'a str],
    tag: &str,
    line_no: usize,
) -> Result<[&'a str; N]> {
    <[&'a str; N]>::try_from(operands).map_err(|_| {
        malformed(
            line_no,
            format!("`{tag}` expects {N} operands, found {}", operands.len()),
        )
    })
}

fn member(operand: &str, descriptor: Option<&str>, line_no: usize) -> Result<MemberReference> {
    MemberReference::parse_srg(operand, descriptor)
        .ok_or_else(|| malformed(line_no, format!("`{operand}` is not of the form owner/name")))
}

fn malformed(line: usize, reason: impl Into<String>) -> MappingError {
    MappingError::MalformedMappingLine {
        line,
        reason: reason.into(),
    }
}

fn duplicate(
    line: usize,
    table: MappingTable,
    collision: Collision,
    entry: String,
) -> MappingError {
    let side = match collision {
        Collision::Key => "name",
        Collision::Value => "mapped name",
    };
    MappingError::DuplicateMapping {
        line,
        table,
        entry: format!("{entry} (repeated {side})"),
    }
}
