use wpcs_ir::Span;

use super::*;

#[test]
fn source_too_large_message() {
    let err = LexError::SourceTooLarge { len: 5_000_000_000 };
    assert_eq!(
        err.to_string(),
        "source is 5000000000 bytes, larger than the 4294967295 byte limit"
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn span_error_maps_to_source_too_large() {
    let too_far = u32::MAX as usize + 1;
    let span_err = Span::try_from_range(0..too_far).unwrap_err();
    assert_eq!(
        LexError::from_span_error(span_err, too_far),
        LexError::SourceTooLarge { len: too_far }
    );
}
