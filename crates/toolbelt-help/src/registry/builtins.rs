//! Built-in utility descriptors
//!
//! One entry per public name exported by `toolbelt-utils`. Listing, lookup
//! and the `helpme` binary all derive from [`builtin_descriptors`].

use crate::{UtilityDescriptor, UtilityKind};

/// Number of built-in descriptors.
pub const BUILTIN_COUNT: usize = 31;

fn function(name: &str, summary: &str, signature: &str) -> UtilityDescriptor {
    UtilityDescriptor::new(name, UtilityKind::Function, summary, signature)
}

fn type_(name: &str, summary: &str, signature: &str) -> UtilityDescriptor {
    UtilityDescriptor::new(name, UtilityKind::Type, summary, signature)
}

fn constant(name: &str, summary: &str, signature: &str) -> UtilityDescriptor {
    UtilityDescriptor::new(name, UtilityKind::Constant, summary, signature)
}

/// Returns every built-in descriptor.
pub fn builtin_descriptors() -> Vec<UtilityDescriptor> {
    vec![
        // Formatting
        function(
            "as_price",
            "Display a number as a price with two decimal places",
            "as_price(amount: f64, currency: &str) -> String",
        )
        .with_example("as_price(19.99, \"$\") == \"$19.99\"")
        .with_example("as_price(5.0, DEFAULT_CURRENCY) == \"€5.00\""),
        constant(
            "DEFAULT_CURRENCY",
            "Currency symbol used when callers have no preference",
            "const DEFAULT_CURRENCY: &str = \"€\"",
        )
        .with_example("as_price(1.5, DEFAULT_CURRENCY)"),
        function(
            "int_to_roman",
            "Convert a positive integer to a roman numeral",
            "int_to_roman(num: u32) -> Result<String>",
        )
        .with_example("int_to_roman(1994)? == \"MCMXCIV\"")
        .with_example("int_to_roman(0) is Err(OutOfRange)"),
        function(
            "roman_to_int",
            "Convert a roman numeral back to an integer",
            "roman_to_int(input: &str) -> Result<u32>",
        )
        .with_example("roman_to_int(\"mcmxciv\")? == 1994"),
        function(
            "num_to_word",
            "Write an integer out in English words",
            "num_to_word(num: i128) -> String",
        )
        .with_example("num_to_word(3523) == \"three thousand five hundred twenty-three\"")
        .with_example("num_to_word(-7) == \"negative seven\""),
        function(
            "num_to_word_f64",
            "Write a decimal number out in words, reading digits after the point",
            "num_to_word_f64(num: f64) -> Result<String>",
        )
        .with_example("num_to_word_f64(123.5)? == \"one hundred twenty-three point five\""),
        function(
            "format_clock",
            "Format a number of seconds as hours, minutes and seconds",
            "format_clock(seconds: u64, style: ClockStyle) -> String",
        )
        .with_example("format_clock(3723, ClockStyle::Colons) == \"01:02:03\""),
        // Text
        type_(
            "StrExt",
            "Extension methods on str for inspecting and reshaping text",
            "trait StrExt { contains_ignore_case, contains_any, has_digit, has_lower, has_upper, has_symbol, has_whitespace, is_email, is_yes, remove_chars, reversed, pad_lines_below, pad_lines_above, pad_lines_around, expand, split_every, shuffled, masked, drop_last }",
        )
        .with_example("\"Hello\".contains_any(\"xyzh\", false) == true")
        .with_example("\"abcdefg\".split_every(3) == [\"abc\", \"def\", \"g\"]")
        .with_example("\"secret\".masked() == \"••••••\""),
        type_(
            "Lorem",
            "Random lorem ipsum words, sentences, paragraphs and text",
            "Lorem::word(rng) | sentence(rng) | paragraph(rng) | text(rng) | words(rng, Option<usize>)",
        )
        .with_example("Lorem::sentence(&mut rand::thread_rng())")
        .with_example("Lorem::words(&mut rng, Some(5)).len() == 5"),
        type_(
            "Align",
            "Left, right or centre alignment within a fixed width",
            "enum Align { Left, Right, Center }; Align::pad(self, text, width, fill) -> String",
        )
        .with_example("Align::Center.pad(\"ab\", 5, '-') == \"-ab--\""),
        // Terminal output
        function(
            "markup::render",
            "Turn <red>..</red> style tags into ANSI escapes, rejecting unbalanced tags",
            "markup::render(text: &str) -> Result<String>",
        )
        .with_example("markup::render(\"<green>ok</green>\")?")
        .with_example("markup::render(\"<b>bold <bgblue>on blue</bgblue></b>\")?"),
        function(
            "markup::render_lenient",
            "Render markup tags without validation, applying only balanced tags",
            "markup::render_lenient(text: &str) -> String",
        )
        .with_example("markup::render_lenient(\"<red>unclosed\") == \"<red>unclosed\""),
        function(
            "markup::strip",
            "Remove every known markup tag, leaving plain text",
            "markup::strip(text: &str) -> String",
        )
        .with_example("markup::strip(\"<red>hi</red>\") == \"hi\""),
        constant(
            "markup::colors",
            "ANSI escape constants for foregrounds, backgrounds and decorations",
            "markup::colors::{RED, DARK_RED, BG_RED, BOLD, RESET, ...}: &str",
        )
        .with_example("format!(\"{}warning{}\", colors::YELLOW, colors::RESET)"),
        function(
            "error_message",
            "Red text followed by a reset",
            "error_message(text: &str) -> String",
        )
        .with_example("println!(\"{}\", error_message(\"Something went wrong\"))"),
        function(
            "success_message",
            "Green text followed by a reset",
            "success_message(text: &str) -> String",
        )
        .with_example("println!(\"{}\", success_message(\"Saved\"))"),
        function(
            "menu",
            "Draw a list of options inside a titled box",
            "menu(options: &[impl AsRef<str>], style: &MenuStyle) -> Result<String>",
        )
        .with_example("menu(&[\"Play\", \"Options\", \"Quit\"], &MenuStyle::default())?"),
        type_(
            "MenuStyle",
            "Spacing, title, numbering, border and alignment for menu",
            "struct MenuStyle { spacing, vertical_spacing, title, numbered, border, align }",
        )
        .with_example("MenuStyle { numbered: true, border: Border::Double, ..MenuStyle::default() }"),
        type_(
            "Border",
            "Box-drawing style for menu",
            "enum Border { Bold, Clean, Default, Wiggle, Double }",
        )
        .with_example("Border::Clean"),
        type_(
            "Table",
            "Fixed rows by columns grid of text cells with optional headers",
            "Table::new(rows, cols) -> Result<Table>; set_row, set_rows, set_headers, get, row, clear_rows, clear_headers",
        )
        .with_example("let mut t = Table::new(2, 2)?; t.set_row(0, vec![\"a\", \"b\"])?; println!(\"{t}\")"),
        type_(
            "TableStyle",
            "Alignment, cell width, index column and empty-cell display for Table",
            "struct TableStyle { align, width, show_index, index_header, header_separator, show_nulls }",
        )
        .with_example("TableStyle { show_index: true, ..TableStyle::default() }"),
        type_(
            "Countdown",
            "Count down from up to 24 hours, one frame per second",
            "Countdown::from_parts(&[h, m, s]) -> Result<Countdown>; frames(); run(out, tick)",
        )
        .with_example("Countdown::from_parts(&[1, 30])?.run(&mut std::io::stdout(), TICK)?"),
        type_(
            "ClockStyle",
            "How each countdown tick is written",
            "enum ClockStyle { Colons, Words, Letters }",
        )
        .with_example("Countdown::from_parts(&[90])?.with_style(ClockStyle::Letters)"),
        type_(
            "Position",
            "Where each countdown tick sits within a fixed width",
            "enum Position { Default, Aligned { align, width } }; parses \"rjust(20)\"",
        )
        .with_example("\"center(30)\".parse::<Position>()?"),
        // Ranges and randomness
        function(
            "xrange",
            "Range over floats with a fractional step",
            "xrange(start: f64, stop: f64, step: f64, inclusive: bool) -> Result<XRange>",
        )
        .with_example("xrange(0.0, 1.0, 0.25, true)?.collect::<Vec<_>>() == [0.0, 0.25, 0.5, 0.75, 1.0]")
        .with_example("xrange(3.0, 0.0, -1.0, false)? yields 3, 2, 1"),
        type_(
            "XRange",
            "Iterator returned by xrange",
            "XRange::up_to(stop) | XRange::between(start, stop) -> Result<XRange>",
        )
        .with_example("XRange::up_to(4.0)?.collect::<Vec<_>>() == [0.0, 1.0, 2.0, 3.0]"),
        function(
            "dice_roll",
            "Roll a six-sided die",
            "dice_roll(rng: &mut impl Rng) -> u8",
        )
        .with_example("dice_roll(&mut rand::thread_rng())"),
        // Files and timing
        function(
            "file_exists",
            "True if a path is a regular file that can be opened",
            "file_exists(path: impl AsRef<Path>) -> bool",
        )
        .with_example("file_exists(\"Cargo.toml\")"),
        function(
            "read_csv",
            "Read a delimited text file into rows of fields",
            "read_csv(path: impl AsRef<Path>, delimiter: &str) -> Result<Vec<Vec<String>>>",
        )
        .with_example("read_csv(\"people.csv\", \",\")?"),
        function(
            "time_this",
            "Run a closure and return its result with the elapsed time",
            "time_this(label: &str, f: impl FnOnce() -> T) -> (T, Duration)",
        )
        .with_example("let (sum, elapsed) = time_this(\"sum\", || (1..=10).sum::<u32>());"),
        // Help
        function(
            "helpme",
            "Print the list of utilities, or the details of one",
            "helpme(name: Option<&str>) -> String",
        )
        .with_example("print!(\"{}\", helpme(None))")
        .with_example("print!(\"{}\", helpme(Some(\"as_price\")))"),
    ]
}
