use tern_compiler::post::encode_string;

use crate::style::{Role, Style};

pub struct QuoteArgs {
    pub text: String,
    pub color: bool,
}

pub fn run(args: QuoteArgs) {
    let literal = encode_string(&args.text);
    println!("{}", Style::new(args.color).paint(Role::Literal, literal));
}
