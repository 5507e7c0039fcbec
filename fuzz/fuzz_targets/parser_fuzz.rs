#![no_main]
use libfuzzer_sys::fuzz_target;

const SUBCOMMANDS: [&str; 3] = ["decode", "encode", "config"];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    let args: Vec<String> = std::iter::once(SUBCOMMANDS[usize::from(selector) % 3].to_string())
        .chain(text.split_whitespace().take(16).map(str::to_string))
        .collect();
    gamegenie::cli::fuzz_try_parse_args(&args);
});
