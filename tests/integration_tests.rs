//! Integration tests for the fastfmt crate.
//!
//! ## Formatting
//! - `test_basic_substitution`: positional substitution of mixed values
//! - `test_escapes`: doubled braces and placeholders next to them
//! - `test_handler_selection`: each built-in handler is picked for its types
//! - `test_display_fallback`: derived and third-party `Display` types
//! - `test_missing_argument`: too few arguments at runtime
//! - `test_runtime_templates`: validation of templates built at runtime
//! - `test_format_to`: appending to a reused buffer
//! - `test_custom_handler`: user-provided handlers through `new_custom`
//! - `test_argument_limit`: the runtime argument cap
//!
//! ## Printing
//! - `test_print_to_sink`: the `fprint*` macro family
//! - `test_print_fmt_errors`: format failures leave the sink untouched
//!
//! ## Auto traits
//! - compile-time checks of `Send`, `Sync` and `Copy` guarantees

use fastfmt::{
    Argument, Brace, FormatError, MAX_ARGUMENTS, OutputBuffer, Template, handlers,
    handlers::ArgumentHandler, io::PrintError, vformat,
};
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(Template<'static>: Send, Sync, Copy, core::fmt::Display);
assert_impl_all!(FormatError: Send, Sync, Copy, Eq, std::error::Error);
assert_impl_all!(PrintError: Send, Sync, std::error::Error);
assert_impl_all!(fastfmt::input::InputError: Send, Sync, std::error::Error);
assert_impl_all!(OutputBuffer: Send, Sync, Clone, Default, core::fmt::Write);
assert_impl_all!(Argument<'static>: Copy, core::fmt::Debug);
assert_not_impl_any!(Argument<'static>: Send, Sync);

#[test]
fn test_basic_substitution() {
    assert_eq!(fastfmt::format!("{} + {} = {}", 2, 3, 5).unwrap(), "2 + 3 = 5");
    assert_eq!(
        fastfmt::format!("Iteration {}: value = {}", 7, 14).unwrap(),
        "Iteration 7: value = 14"
    );
    assert_eq!(
        fastfmt::format!("{} and {}", true, false).unwrap(),
        "true and false"
    );
    assert_eq!(fastfmt::format!("{}", -42).unwrap(), "-42");
    assert_eq!(fastfmt::format!("literal only").unwrap(), "literal only");
    assert_eq!(fastfmt::format!("{}{}{}", 1, 2, 3).unwrap(), "123");
    assert_eq!(fastfmt::format!("only {}", 1, 2, 3).unwrap(), "only 1");
    assert_eq!(fastfmt::format!("").unwrap(), "");
}

#[test]
fn test_escapes() {
    assert_eq!(fastfmt::format!("{{}}").unwrap(), "{}");
    assert_eq!(fastfmt::format!("{{{}}}", 5).unwrap(), "{5}");
    assert_eq!(fastfmt::format!("{{abc}}").unwrap(), "{abc}");
    assert_eq!(fastfmt::format!("{ignored}|{:>8}", 'a', 'b').unwrap(), "a|b");
}

#[test]
fn test_handler_selection() {
    // A char is a character, not a number
    assert_eq!(fastfmt::format!("{}{}", 'a', 'é').unwrap(), "aé");
    assert_eq!(fastfmt::format!("{}", i64::MIN).unwrap(), "-9223372036854775808");
    assert_eq!(
        fastfmt::format!("{}", u128::MAX).unwrap(),
        "340282366920938463463374607431768211455"
    );
    assert_eq!(fastfmt::format!("{}", 1.5f64).unwrap(), "1.5");
    assert_eq!(fastfmt::format!("{}", 1.0f64).unwrap(), "1");
    assert_eq!(fastfmt::format!("{}", 0.25).unwrap(), "0.25");

    let owned = String::from("say \"hi\"");
    let borrowed: &str = "plain";
    assert_eq!(
        fastfmt::format!("{} {} {}", owned, borrowed, &owned).unwrap(),
        "say \"hi\" plain say \"hi\""
    );

    // Handler choice shows up in the size estimates
    let args = fastfmt::arguments!(true, 'x', 7u8, owned);
    assert_eq!(args.estimate_total_size(), 4 + 1 + 3 + owned.len());
    assert_eq!(args[1].type_name(), "char");
}

#[test]
fn test_display_fallback() {
    #[derive(derive_more::Display)]
    #[display("{name}@{version}")]
    struct Package {
        name: &'static str,
        version: u32,
    }

    let package = Package {
        name: "fastfmt",
        version: 3,
    };
    assert_eq!(
        fastfmt::format!("installing {}", package).unwrap(),
        "installing fastfmt@3"
    );

    let payload = serde_json::json!({ "id": 7, "tags": ["a", "b"] });
    assert_eq!(
        fastfmt::format!("payload: {}", payload).unwrap(),
        r#"payload: {"id":7,"tags":["a","b"]}"#
    );

    let args = fastfmt::arguments!(payload);
    assert_eq!(args.estimate_total_size(), handlers::DEFAULT_ESTIMATE);
}

#[test]
fn test_missing_argument() {
    assert_eq!(
        fastfmt::format!("{} {}", 1),
        Err(FormatError::MissingArgument { index: 1 })
    );
    let error = fastfmt::format!("{}").unwrap_err();
    assert_eq!(error, FormatError::MissingArgument { index: 0 });
    assert_eq!(error.to_string(), "not enough arguments for format template (argument 0 is missing)");
}

#[test]
fn test_runtime_templates() {
    assert_eq!(
        Template::new("{abc").unwrap_err(),
        FormatError::UnbalancedBraces {
            brace: Brace::Opening,
            position: 0
        }
    );
    assert_eq!(
        Template::parse("abc}").unwrap_err(),
        FormatError::UnbalancedBraces {
            brace: Brace::Closing,
            position: 3
        }
    );

    let text = String::from("{} of {}");
    let template = Template::try_from(text.as_str()).unwrap();
    assert_eq!(template.placeholder_count(), 2);
    assert_eq!(
        vformat(&template, &fastfmt::arguments!(1, 2)).unwrap(),
        "1 of 2"
    );
}

#[test]
fn test_format_to() {
    let mut buf = OutputBuffer::with_capacity(0);
    for (name, score) in [("ann", 3), ("bo", 12)] {
        fastfmt::format_to!(&mut buf, "{}={};", name, score).unwrap();
    }
    assert_eq!(buf.as_str(), "ann=3;bo=12;");

    assert!(fastfmt::format_to!(&mut buf, "{}{}", 1).is_err());
    assert_eq!(buf.as_str(), "ann=3;bo=12;");

    buf.clear();
    fastfmt::format_to!(&mut buf, "{}", 'z').unwrap();
    assert_eq!(buf.into_string(), "z");
}

#[test]
fn test_custom_handler() {
    struct Hex;

    impl ArgumentHandler<u32> for Hex {
        fn render(value: &u32, buf: &mut OutputBuffer) {
            use core::fmt::Write;
            let _ = write!(buf, "0x{value:08x}");
        }

        fn estimated_size(_value: &u32) -> usize {
            10
        }
    }

    let value = 0xbeefu32;
    let template = Template::new("{} ({})").unwrap();
    let args = [
        Argument::new_custom::<_, Hex>(&value),
        Argument::new_custom::<_, handlers::Integer>(&value),
    ];
    assert_eq!(vformat(&template, &args).unwrap(), "0x0000beef (48879)");
    assert_eq!(args[0].estimated_size(), 10);
}

#[test]
fn test_argument_limit() {
    let value = 1u8;
    let args = [Argument::new_custom::<_, handlers::Integer>(&value); MAX_ARGUMENTS + 1];
    let template = Template::new("{}").unwrap();
    assert_eq!(
        vformat(&template, &args),
        Err(FormatError::TooManyArguments {
            count: 17,
            capacity: 16
        })
    );

    let full = fastfmt::format!(
        "{}{}{}{}{}{}{}{}{}{}{}{}{}{}{}{}",
        1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6
    );
    assert_eq!(full.unwrap(), "1234567890123456");
}

#[test]
fn test_print_to_sink() {
    let mut out = Vec::new();
    fastfmt::fprintln_spaced!(&mut out, 'a', 'b', 'c').unwrap();
    fastfmt::fprint!(&mut out, "n=", 3, ';').unwrap();
    fastfmt::fprintln!(&mut out).unwrap();
    fastfmt::fprint_spaced!(&mut out, 1.5, true).unwrap();
    fastfmt::fprint_fmt!(&mut out, "[{}]", 9).unwrap();
    fastfmt::fprintln_fmt!(&mut out, " {{{}}}", "done").unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "a b c\nn=3;\n1.5 true[9] {done}\n"
    );
}

#[test]
fn test_print_fmt_errors() {
    let mut out = Vec::new();
    let error = fastfmt::fprint_fmt!(&mut out, "{}, {}, {}", 1, 2).unwrap_err();
    assert!(matches!(
        error,
        PrintError::Format(FormatError::MissingArgument { index: 2 })
    ));
    assert!(out.is_empty());
    assert!(std::error::Error::source(&error).is_some());
}
