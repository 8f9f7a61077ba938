//! Passphrase sources
//!
//! The vault never reads a passphrase itself. It asks a [`PassphraseSource`],
//! which may show a hidden terminal prompt, hand back a value given up front,
//! or (in tests) replay a script.

use crate::crypto::SecureString;
use crate::error::{VaultError, VaultResult};

/// Supplies passphrases on demand
pub trait PassphraseSource {
    /// Ask for a passphrase, showing `message` to the user.
    ///
    /// `Ok(None)` means the user cancelled.
    fn obtain(&mut self, message: &str) -> VaultResult<Option<SecureString>>;
}

impl<P: PassphraseSource + ?Sized> PassphraseSource for Box<P> {
    fn obtain(&mut self, message: &str) -> VaultResult<Option<SecureString>> {
        (**self).obtain(message)
    }
}

impl<P: PassphraseSource + ?Sized> PassphraseSource for &mut P {
    fn obtain(&mut self, message: &str) -> VaultResult<Option<SecureString>> {
        (**self).obtain(message)
    }
}

/// Hidden-input prompt on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl PassphraseSource for TerminalPrompt {
    fn obtain(&mut self, message: &str) -> VaultResult<Option<SecureString>> {
        let input = rpassword::prompt_password(format!("{}: ", message))
            .map_err(|e| VaultError::Prompt(format!("Failed to read passphrase: {}", e)))?;

        let input = SecureString::from(input);
        // Submitting an empty line is treated as cancelling
        Ok((!input.is_empty()).then_some(input))
    }
}

/// A passphrase supplied ahead of time (CLI flag or environment)
#[derive(Debug, Clone)]
pub struct FixedPassphrase {
    passphrase: SecureString,
}

impl FixedPassphrase {
    pub fn new(passphrase: impl Into<SecureString>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }
}

impl PassphraseSource for FixedPassphrase {
    fn obtain(&mut self, message: &str) -> VaultResult<Option<SecureString>> {
        log::debug!("using preset passphrase for prompt: {}", message);
        if self.passphrase.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.passphrase.clone()))
    }
}
