#![no_main]
use formath_fmt::{Arg, FORMAT_ERROR_PREFIX};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any template must yield a string, never a panic.
    let s = String::from_utf8_lossy(data);
    let args = [Arg::Int(1), Arg::from("two"), Arg::Float(3.0)];
    for n in 0..=args.len() {
        let out = formath_fmt::format(&s, &args[..n]);
        if formath_fmt::try_format(&s, &args[..n]).is_err() {
            assert!(out.starts_with(FORMAT_ERROR_PREFIX));
        }
    }
});
