//! Envelope contract tests

use base64::{engine::general_purpose::STANDARD, Engine};
use biobalance::crypto::{decrypt, encrypt, Envelope};
use serde_json::json;

const PASSPHRASE: &str = "correct horse battery staple";

#[test]
fn concrete_scenario() {
    let value = json!({"name": "Alice", "age": 30});

    let envelope = encrypt(&value, PASSPHRASE).unwrap();
    let parts: Vec<&str> = envelope.split(':').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(STANDARD.decode(parts[0]).unwrap().len(), 16);
    assert_eq!(STANDARD.decode(parts[1]).unwrap().len(), 12);
    assert!(STANDARD.decode(parts[2]).is_ok());

    assert_eq!(decrypt(&envelope, PASSPHRASE).unwrap(), value);
    assert!(decrypt(&envelope, "wrong password").unwrap_err().is_decryption());
}

#[test]
fn structural_round_trip_of_varied_values() {
    let values = [
        json!(null),
        json!("plain string with unicode: 血圧 ✓"),
        json!(-12.5),
        json!([1, "two", [3.0], {"four": 4}]),
        json!({
            "name": "Sarah",
            "vitals": {"blood_pressure": "118/78", "blood_sugar": 85},
            "conditions": []
        }),
    ];

    for value in values {
        let envelope = encrypt(&value, "p").unwrap();
        assert_eq!(decrypt(&envelope, "p").unwrap(), value);
    }
}

#[test]
fn every_ciphertext_byte_is_authenticated() {
    let envelope = encrypt(&json!(true), PASSPHRASE).unwrap();
    let original = Envelope::parse(&envelope).unwrap();

    for index in 0..original.ciphertext.len() {
        let mut tampered = original.clone();
        tampered.ciphertext[index] ^= 0x80;
        let result = decrypt(&tampered.to_string(), PASSPHRASE);
        assert!(
            result.as_ref().is_err_and(|e| e.is_decryption()),
            "flip at byte {} gave {:?}",
            index,
            result
        );
    }
}

#[test]
fn tampered_salt_or_nonce_is_rejected() {
    let envelope = encrypt(&json!(42), PASSPHRASE).unwrap();
    let original = Envelope::parse(&envelope).unwrap();

    let mut salt_flip = original.clone();
    salt_flip.salt[0] ^= 1;
    assert!(decrypt(&salt_flip.to_string(), PASSPHRASE)
        .unwrap_err()
        .is_decryption());

    let mut nonce_flip = original;
    nonce_flip.nonce[11] ^= 1;
    assert!(decrypt(&nonce_flip.to_string(), PASSPHRASE)
        .unwrap_err()
        .is_decryption());
}

#[test]
fn malformed_envelopes_are_format_errors() {
    let good = encrypt(&json!(1), PASSPHRASE).unwrap();
    let parts: Vec<&str> = good.split(':').collect();

    let cases = [
        String::new(),
        "no-delimiters".to_string(),
        good.splitn(2, ':').last().unwrap().to_string(),
        format!("{}:extra", good),
        format!("{}:%%%:{}", parts[0], parts[2]),
        format!("{}:{}:not base64!", parts[0], parts[1]),
    ];

    for case in cases {
        let err = decrypt(&case, PASSPHRASE).unwrap_err();
        assert!(err.is_format(), "{:?} gave {:?}", case, err);
    }
}
