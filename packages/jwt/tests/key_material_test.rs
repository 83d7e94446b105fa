//! PEM parsing and key validation

mod common;

use common::{TestResult, EC_KEY, RSA_KEY};
use jwtgen_common::LoggingTransformer;
use jwtgen_jwt::keys::{MIN_RSA_MODULUS_BITS, RECOMMENDED_HMAC_KEY_LEN};
use jwtgen_jwt::{KeyMaterial, TokenError, TokenRng};
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

fn is_configuration<T: std::fmt::Debug>(result: Result<T, TokenError>) -> bool {
    matches!(result, Err(TokenError::Configuration(_)))
}

#[test]
fn test_rsa_private_pkcs1_and_pkcs8() -> TestResult {
    let pkcs1 = EncodeRsaPrivateKey::to_pkcs1_pem(&*RSA_KEY, LineEnding::LF)?;
    let pkcs8 = EncodePrivateKey::to_pkcs8_pem(&*RSA_KEY, LineEnding::LF)?;
    assert!(pkcs1.contains("BEGIN RSA PRIVATE KEY"));
    assert!(pkcs8.contains("BEGIN PRIVATE KEY"));

    for pem in [pkcs1.as_str(), pkcs8.as_str()] {
        match KeyMaterial::rsa_private_from_pem(pem)? {
            KeyMaterial::RsaPrivate(key) => assert_eq!(key, *RSA_KEY),
            other => panic!("unexpected {}", other.kind()),
        }
    }
    Ok(())
}

#[test]
fn test_rsa_public_spki_and_pkcs1() -> TestResult {
    let public_key = RsaPublicKey::from(&*RSA_KEY);
    let spki = EncodePublicKey::to_public_key_pem(&public_key, LineEnding::LF)?;
    let pkcs1 = EncodeRsaPublicKey::to_pkcs1_pem(&public_key, LineEnding::LF)?;
    assert!(pkcs1.contains("BEGIN RSA PUBLIC KEY"));

    for pem in [spki.as_str(), pkcs1.as_str()] {
        match KeyMaterial::rsa_public_from_pem(pem)? {
            KeyMaterial::RsaPublic(key) => assert_eq!(key, public_key),
            other => panic!("unexpected {}", other.kind()),
        }
    }
    Ok(())
}

#[test]
fn test_ec_sec1_and_pkcs8() -> TestResult {
    let sec1 = EC_KEY.to_sec1_pem(LineEnding::LF)?;
    let pkcs8 = EC_KEY.to_pkcs8_pem(LineEnding::LF)?;
    assert!(sec1.contains("BEGIN EC PRIVATE KEY"));

    let expected = p256::ecdsa::SigningKey::from(EC_KEY.clone());
    for pem in [sec1.as_str(), pkcs8.as_str()] {
        match KeyMaterial::ec_private_from_pem(pem)? {
            KeyMaterial::EcPrivate(key) => assert_eq!(key, expected),
            other => panic!("unexpected {}", other.kind()),
        }
    }
    Ok(())
}

#[test]
fn test_undersized_rsa_keys_rejected() -> TestResult {
    let mut rng = TokenRng::seeded(1024);
    let weak = RsaPrivateKey::new(&mut rng, 1024)?;
    assert!(MIN_RSA_MODULUS_BITS > 1024);

    let private_pem = EncodePrivateKey::to_pkcs8_pem(&weak, LineEnding::LF)?;
    assert!(is_configuration(KeyMaterial::rsa_private_from_pem(&private_pem)));

    let public_pem = EncodePublicKey::to_public_key_pem(&weak.to_public_key(), LineEnding::LF)?;
    assert!(is_configuration(KeyMaterial::rsa_public_from_pem(&public_pem)));

    assert!(is_configuration(KeyMaterial::rsa_private(weak)));
    Ok(())
}

#[test]
fn test_modulus_just_under_floor_rejected() -> TestResult {
    LoggingTransformer::init_test();

    // 2042 bits still occupies 256 bytes
    let mut rng = TokenRng::seeded(9);
    let short = RsaPrivateKey::new(&mut rng, 2042)?;
    assert_eq!(short.size(), 256);

    let private_pem = EncodePrivateKey::to_pkcs8_pem(&short, LineEnding::LF)?;
    let public_key = short.to_public_key();
    let public_pem = EncodePublicKey::to_public_key_pem(&public_key, LineEnding::LF)?;

    match KeyMaterial::rsa_private(short) {
        Err(TokenError::Configuration(msg)) => assert!(msg.contains("2042 bits"), "{msg}"),
        other => panic!("2042-bit key accepted: {other:?}"),
    }
    assert!(is_configuration(KeyMaterial::rsa_public(public_key)));
    assert!(is_configuration(KeyMaterial::rsa_private_from_pem(&private_pem)));
    assert!(is_configuration(KeyMaterial::rsa_public_from_pem(&public_pem)));
    Ok(())
}

#[test]
fn test_wrong_pem_type_rejected() -> TestResult {
    let rsa_pem = EncodePrivateKey::to_pkcs8_pem(&*RSA_KEY, LineEnding::LF)?;
    assert!(is_configuration(KeyMaterial::ec_private_from_pem(&rsa_pem)));

    let ec_pem = EC_KEY.to_sec1_pem(LineEnding::LF)?;
    assert!(is_configuration(KeyMaterial::rsa_private_from_pem(&ec_pem)));
    assert!(is_configuration(KeyMaterial::rsa_public_from_pem(&ec_pem)));

    assert!(is_configuration(KeyMaterial::rsa_private_from_pem("not a key")));
    Ok(())
}

#[test]
fn test_shared_secret_rules() -> TestResult {
    LoggingTransformer::init_test();

    assert!(is_configuration(KeyMaterial::shared_secret(Vec::new())));

    // short secrets are accepted with a warning
    let short = KeyMaterial::shared_secret(b"short".to_vec())?;
    assert_eq!(short.kind(), "shared secret");

    let full = KeyMaterial::shared_secret(vec![7u8; RECOMMENDED_HMAC_KEY_LEN])?;
    let KeyMaterial::SharedSecret(secret) = &full else {
        panic!("unexpected {}", full.kind());
    };
    assert_eq!(secret.len(), RECOMMENDED_HMAC_KEY_LEN);

    let printed = format!("{full:?}");
    assert!(!printed.contains("7, 7"), "{printed}");
    Ok(())
}
