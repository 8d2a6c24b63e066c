use std::io::{self, Write};

use namemap_descriptor::internal_name_of;

use crate::map::SymbolMap;
use crate::member::MemberReference;

impl SymbolMap {
    /// Serialize as `CL:`, then `FD:`, then `MD:` records, each group sorted by human name.
    ///
    /// Parsing the output yields a map equal to `self`.
    pub fn write_srg<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.to_srg_string().as_bytes())?;
        out.flush()
    }

    /// The records [`SymbolMap::write_srg`] writes, as one string.
    pub fn to_srg_string(&self) -> String {
        let mut text = String::new();

        let mut classes: Vec<_> = self.classes().iter().collect();
        classes.sort();
        for (human, mapped) in classes {
            push_record(
                &mut text,
                "CL:",
                &[internal_name_of(human).as_str(), internal_name_of(mapped).as_str()],
            );
        }

        let mut fields: Vec<_> = self.fields().iter().collect();
        fields.sort();
        for (human, mapped) in fields {
            push_record(
                &mut text,
                "FD:",
                &[srg_operand(human).as_str(), srg_operand(mapped).as_str()],
            );
        }

        let mut methods: Vec<_> = self.methods().iter().collect();
        methods.sort();
        for (human, mapped) in methods {
            push_record(
                &mut text,
                "MD:",
                &[
                    srg_operand(human).as_str(),
                    human.descriptor.as_deref().unwrap_or_default(),
                    srg_operand(mapped).as_str(),
                    mapped.descriptor.as_deref().unwrap_or_default(),
                ],
            );
        }

        text
    }
}

fn push_record(text: &mut String, tag: &str, operands: &[&str]) {
    text.push_str(tag);
    for operand in operands {
        text.push(' ');
        text.push_str(operand);
    }
    text.push('\n');
}

fn srg_operand(member: &MemberReference) -> String {
    format!("{}/{}", internal_name_of(&member.owner), member.name)
}
