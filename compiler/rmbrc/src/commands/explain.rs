//! The `explain` command: print the long description of an error code.

use rmbr_diagnostic::{ErrorCode, ErrorDocs};

pub fn explain_error(code_str: &str) -> bool {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E1001, E2001, E3002");
        return false;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
        true
    } else {
        eprintln!("No documentation available for {code}");
        false
    }
}
