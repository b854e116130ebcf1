use crate::parser::{Instruction, Program};

pub const LANGUAGE: &str = "IPPcode18";

const INDENT: &str = "  ";

impl Program {
    /// Render the program as an indented XML document.
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        if self.instructions.is_empty() {
            out.push_str(&format!("<program language=\"{LANGUAGE}\"/>\n"));
            return out;
        }
        out.push_str(&format!("<program language=\"{LANGUAGE}\">\n"));
        for inst in &self.instructions {
            write_instruction(&mut out, inst);
        }
        out.push_str("</program>\n");
        out
    }
}

fn write_instruction(out: &mut String, inst: &Instruction) {
    let opcode = escape_xml(&inst.opcode);
    if inst.args.is_empty() {
        out.push_str(&format!(
            "{INDENT}<instruction order=\"{}\" opcode=\"{opcode}\"/>\n",
            inst.order
        ));
        return;
    }
    out.push_str(&format!(
        "{INDENT}<instruction order=\"{}\" opcode=\"{opcode}\">\n",
        inst.order
    ));
    // argN follows position, not role
    for (i, arg) in inst.args.iter().enumerate() {
        let n = i + 1;
        out.push_str(&format!(
            "{INDENT}{INDENT}<arg{n} type=\"{}\">{}</arg{n}>\n",
            arg.type_tag(),
            escape_xml(arg.value())
        ));
    }
    out.push_str(&format!("{INDENT}</instruction>\n"));
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
