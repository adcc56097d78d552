//! Match-block rendering.
//!
//! Output is plain text meant to be pasted into a CPU core. Mnemonics and
//! operand names are inserted as-is, with no escaping.

use std::fmt::Write;

use crate::table::{OpcodeRecord, OpcodeTable};

pub const MATCH_HEADER: &str = "match opcode {";
pub const MATCH_FOOTER: &str = "}";

/// Shape of each generated match arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ArmStyle {
    /// `0x01 => println!("LD  BC  n16  " ),`
    #[default]
    Println,
    /// `0x01 => "LD  BC  n16\n" ,` for a `match` that yields a trace string.
    ///
    /// Every arm ends in `" ,`, operands or not.
    Str,
}

/// Render a single match arm, without a trailing newline.
pub fn render_arm(key: &str, record: &OpcodeRecord, style: ArmStyle) -> String {
    let mut line = String::with_capacity(32);
    match style {
        ArmStyle::Println => {
            let _ = write!(line, "{key} => println!(\"{} ", record.mnemonic);
            for name in record.operand_names() {
                let _ = write!(line, " {name} ");
            }
            line.push_str(" \" ),");
        }
        ArmStyle::Str => {
            let _ = write!(line, "{key} => \"{}", record.mnemonic);
            for name in record.operand_names() {
                let _ = write!(line, "  {name}");
            }
            line.push_str("\\n\" ,");
        }
    }
    line
}

/// Render the full `match opcode { ... }` block, one line per record.
///
/// Every line, the footer included, ends with `\n`.
pub fn render_match(table: &OpcodeTable, style: ArmStyle) -> String {
    let mut out = String::with_capacity(64 + table.len() * 40);
    out.push_str(MATCH_HEADER);
    out.push('\n');
    for (key, record) in table.iter() {
        out.push_str(&render_arm(key, record, style));
        out.push('\n');
    }
    out.push_str(MATCH_FOOTER);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Operand, Section};

    fn record(mnemonic: &str, operands: &[&str]) -> OpcodeRecord {
        OpcodeRecord {
            mnemonic: mnemonic.to_string(),
            operands: operands
                .iter()
                .map(|name| Operand {
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn println_arm_without_operands() {
        let line = render_arm("00", &record("NOP", &[]), ArmStyle::Println);
        assert_eq!(line, r#"00 => println!("NOP  " ),"#);
    }

    #[test]
    fn println_arm_pads_each_operand() {
        let line = render_arm("01", &record("LD", &["B", "C"]), ArmStyle::Println);
        assert_eq!(line, r#"01 => println!("LD  B  C  " ),"#);
    }

    #[test]
    fn println_arm_single_operand() {
        let line = render_arm("0x04", &record("INC", &["B"]), ArmStyle::Println);
        assert_eq!(line, r#"0x04 => println!("INC  B  " ),"#);
    }

    #[test]
    fn names_are_not_escaped() {
        let line = render_arm("0xE2", &record("LDH", &["C", "A"]), ArmStyle::Println);
        assert_eq!(line, r#"0xE2 => println!("LDH  C  A  " ),"#);
        let line = render_arm("0xC7", &record("RST", &["$00"]), ArmStyle::Println);
        assert_eq!(line, r#"0xC7 => println!("RST  $00  " ),"#);
    }

    #[test]
    fn str_arms() {
        assert_eq!(
            render_arm("0x00", &record("NOP", &[]), ArmStyle::Str),
            r#"0x00 => "NOP\n" ,"#
        );
        assert_eq!(
            render_arm("0x01", &record("LD", &["BC", "n16"]), ArmStyle::Str),
            r#"0x01 => "LD  BC  n16\n" ,"#
        );
    }

    #[test]
    fn match_block_framing() {
        let json = r#"{"unprefixed": {
            "0x00": {"mnemonic": "NOP", "operands": []},
            "0x76": {"mnemonic": "HALT", "operands": []},
            "0x3C": {"mnemonic": "INC", "operands": [{"name": "A"}]}
        }}"#;
        let table = OpcodeTable::from_json_str(json, Section::Unprefixed).expect("valid");
        let out = render_match(&table, ArmStyle::Println);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), table.len() + 2);
        assert_eq!(lines[0], MATCH_HEADER);
        assert_eq!(lines[1], r#"0x00 => println!("NOP  " ),"#);
        assert_eq!(lines[2], r#"0x76 => println!("HALT  " ),"#);
        assert_eq!(lines[3], r#"0x3C => println!("INC  A  " ),"#);
        assert_eq!(lines[4], MATCH_FOOTER);
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn empty_table_renders_header_and_footer() {
        let table =
            OpcodeTable::from_json_str(r#"{"unprefixed": {}}"#, Section::Unprefixed).expect("valid");
        assert_eq!(render_match(&table, ArmStyle::Str), "match opcode {\n}\n");
    }

    #[test]
    fn duplicate_mnemonics_are_kept() {
        let json = r#"{"unprefixed": {
            "0xD3": {"mnemonic": "ILLEGAL_D3", "operands": []},
            "0x40": {"mnemonic": "LD", "operands": [{"name": "B"}, {"name": "B"}]},
            "0x41": {"mnemonic": "LD", "operands": [{"name": "B"}, {"name": "C"}]}
        }}"#;
        let table = OpcodeTable::from_json_str(json, Section::Unprefixed).expect("valid");
        let out = render_match(&table, ArmStyle::Println);
        assert_eq!(out.matches("println!(\"LD ").count(), 2);
        assert!(out.contains(r#"0x40 => println!("LD  B  B  " ),"#));
    }

    #[test]
    fn style_names_parse() {
        use clap::ValueEnum;

        assert_eq!(ArmStyle::from_str("println", false), Ok(ArmStyle::Println));
        assert_eq!(ArmStyle::from_str("str", false), Ok(ArmStyle::Str));
        assert!(ArmStyle::from_str("match", false).is_err());
    }
}
