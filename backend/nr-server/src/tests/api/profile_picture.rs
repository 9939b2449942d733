use crate::{ApiError, profile_picture};

use googletest::prelude::*;

#[test]
fn given_no_picture_when_decoded_then_none() {
    assert_that!(profile_picture::decode(None).unwrap(), none());
}

#[test]
fn given_base64_picture_when_decoded_then_bytes() {
    let decoded = profile_picture::decode(Some("AAEC".to_string())).unwrap();

    assert_that!(decoded, some(eq(&vec![0u8, 1, 2])));
}

#[test]
fn given_invalid_base64_when_decoded_then_validation_on_profile_picture() {
    let result = profile_picture::decode(Some("not base64!".to_string()));

    match result {
        Err(ApiError::Validation { field, .. }) => {
            assert_that!(field.as_deref(), some(eq("profile_picture")))
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}
