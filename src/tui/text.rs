use passgen::{CharacterClass, MAX_LENGTH, MIN_LENGTH, entropy::SystemEntropy};

use super::{App, Status};
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, checkbox, flush,
    print_error, print_rule, print_success,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

pub fn print_help() {
    box_top("passgen");
    box_line_center("Password generator with guaranteed character types");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments to open the menu.");
    box_line("  2) Client: pass flags (e.g. -l 16 --no-symbols) to print");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("Every selected character type appears at least once; the");
    box_line("rest is drawn from all selected types and shuffled.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password, {MIN_LENGTH}-{MAX_LENGTH} (default: 8)"),
    );
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("      --no-upper", "Leave out uppercase letters");
    box_opt("      --no-lower", "Leave out lowercase letters");
    box_opt("      --no-digits", "Leave out digits");
    box_opt("      --no-symbols", "Leave out symbols");
    box_opt(
        "      --only <ulds>",
        "Use only these types: u upper, l lower, d digits, s symbols",
    );
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except passwords");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("Set RUST_LOG=debug to trace what the tool is doing.");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgen                      Interactive menu");
    box_line("  passgen -l 16                One password, 16 characters");
    box_line("  passgen -l 12 --no-symbols   Letters and digits only");
    box_line("  passgen --only d -l 8        8-digit PIN");
    box_line("  passgen -l 20 -n 3 -b        Three passwords to clipboard");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_menu(app: &App) {
    box_top("Password Generator");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}Character types{RESET}:"));
    for (n, class) in CharacterClass::ALL.into_iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            n + 1,
            checkbox(app.settings.use_class(class)),
            class.label()
        ));
    }

    box_line("");
    box_line(&format!("{UNDERLINE}Length{RESET}:"));
    box_line(&format!(
        "  5) {} ({MIN_LENGTH}-{MAX_LENGTH})",
        app.settings.pass_length
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Password{RESET}:"));
    match app.displayed_password() {
        Some(mut shown) => {
            box_line(&format!("  {shown}"));
            zeroize::Zeroize::zeroize(&mut shown);
        }
        None => box_line("  (none yet)"),
    }

    box_line("");
    box_line(&format!("  Entropy source: {}", SystemEntropy::source_name()));
    print_rule();
    let reveal = if app.is_visible() { "hide" } else { "show" };
    box_line(&format!(
        "  Enter) generate  v) {reveal}  c) copy  r) defaults"
    ));
    box_line("  h) help  q) quit");
    box_bottom();

    match &app.status {
        Status::Ready => println!("Ready"),
        Status::Generated(len) => println!("Password generated ({len} characters)"),
        Status::Copied => print_success("Copied to clipboard"),
        Status::Error(msg) => print_error(msg),
    }
    flush();
}
