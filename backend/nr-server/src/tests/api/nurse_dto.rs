use crate::NurseDto;

use nr_core::Identity;

use googletest::prelude::*;

fn identity(picture: Option<Vec<u8>>) -> Identity {
    Identity {
        id: 7,
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        email: "ana@test.com".to_string(),
        credential: "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA".to_string(),
        profile_picture: picture,
    }
}

#[test]
fn given_identity_when_serialized_then_credential_is_absent() {
    let dto = NurseDto::from(identity(None));

    let json = serde_json::to_value(&dto).unwrap();

    assert_that!(json["nurse_id"].as_i64(), some(eq(7)));
    assert_that!(json.get("password"), none());
    assert_that!(json.get("credential"), none());
    assert_that!(json.to_string(), not(contains_substring("argon2")));
    assert!(json["profile_picture"].is_null());
}

#[test]
fn given_picture_when_serialized_then_base64_encoded() {
    let dto = NurseDto::from(identity(Some(vec![0xFF, 0xD8, 0xFF])));

    assert_that!(dto.profile_picture.as_deref(), some(eq("/9j/")));
}
