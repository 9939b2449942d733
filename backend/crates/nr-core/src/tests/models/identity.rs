use crate::{Identity, NewIdentity};

use googletest::prelude::*;

fn new_identity() -> NewIdentity {
    NewIdentity {
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        email: "ana.lopez@test.com".to_string(),
        credential: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        profile_picture: Some(vec![1, 2, 3]),
    }
}

#[test]
fn given_new_identity_when_id_attached_then_all_fields_are_carried_over() {
    let new = new_identity();

    let identity = Identity::from_new(7, new.clone());

    assert_that!(identity.id, eq(7));
    assert_that!(identity.first_name, eq(&new.first_name));
    assert_that!(identity.last_name, eq(&new.last_name));
    assert_that!(identity.email, eq(&new.email));
    assert_that!(identity.credential, eq(&new.credential));
    assert_that!(identity.profile_picture, some(eq(&vec![1, 2, 3])));
}

#[test]
fn given_mixed_case_email_when_compared_ignoring_case_then_matches() {
    let identity = Identity::from_new(1, new_identity());

    assert_that!(identity.has_email_ignore_case("ANA.LOPEZ@TEST.COM"), eq(true));
    assert_that!(identity.has_email_ignore_case("ana@test.com"), eq(false));
}

#[test]
fn given_identity_when_debug_formatted_then_credential_is_redacted() {
    let identity = Identity::from_new(1, new_identity());

    let debug = format!("{:?}", identity);

    assert_that!(debug, contains_substring("<redacted>"));
    assert_that!(debug, not(contains_substring("argon2id")));

    let new_debug = format!("{:?}", new_identity());
    assert_that!(new_debug, not(contains_substring("argon2id")));
}
