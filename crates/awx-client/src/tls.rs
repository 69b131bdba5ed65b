//! Trust store assembly from configured CA material.

use std::path::Path;

use reqwest::Certificate;

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};

/// Load every CA certificate named by `config`.
///
/// Inline bundles come first, then files, each in the order supplied.
/// Combining CA material with insecure mode is rejected.
pub(crate) fn load_roots(config: &ClientConfig) -> Result<Vec<Certificate>> {
    if config.insecure && config.has_ca_material() {
        return Err(Error::new(ErrorKind::Config(
            "CA certificates can't be combined with insecure mode".to_string(),
        )));
    }

    let mut roots = Vec::new();

    for pem in &config.ca_certs {
        roots.extend(parse_bundle(pem, || {
            format!(
                "The text '{}' doesn't contain PEM encoded certificates",
                String::from_utf8_lossy(pem)
            )
        })?);
    }

    for file in &config.ca_files {
        roots.extend(load_file(file)?);
    }

    Ok(roots)
}

fn load_file(file: &Path) -> Result<Vec<Certificate>> {
    let pem = std::fs::read(file).map_err(|e| {
        Error::with_source(
            ErrorKind::Certificate(format!(
                "Can't read CA file '{}': {}",
                file.display(),
                e
            )),
            e,
        )
    })?;

    parse_bundle(&pem, || {
        format!(
            "The file '{}' doesn't contain PEM encoded certificates",
            file.display()
        )
    })
}

fn parse_bundle(pem: &[u8], describe: impl Fn() -> String) -> Result<Vec<Certificate>> {
    let certs = Certificate::from_pem_bundle(pem)
        .map_err(|e| Error::with_source(ErrorKind::Certificate(describe()), e))?;

    if certs.is_empty() {
        return Err(Error::new(ErrorKind::Certificate(describe())));
    }

    tracing::debug!(count = certs.len(), "Loaded CA certificates");
    Ok(certs)
}

#[cfg(test)]
pub(crate) const SELF_SIGNED_PEM: &str = "\
-----BEGIN CERTIFICATE-----\n\
MIIBjDCCATGgAwIBAgIUL+8BYDsgq7HtuA05+SyBETWHjvcwCgYIKoZIzj0EAwIw\n\
GjEYMBYGA1UEAwwPYXd4LmV4YW1wbGUuY29tMCAXDTI2MTAxOTA5MzY1N1oYDzIx\n\
MjYwOTI1MDkzNjU3WjAaMRgwFgYDVQQDDA9hd3guZXhhbXBsZS5jb20wWTATBgcq\n\
hkjOPQIBBggqhkjOPQMBBwNCAASJS8SmcLMcTrTAnXznONp2PwiNSsyKeXygWUtP\n\
eZpDRyufaxD7dhZgWaMg/Om+lPzsdSNncewPM5vI4MYXO/p+o1MwUTAdBgNVHQ4E\n\
FgQU8wOtMgyC7nKegm48hlZ2wCmxIw8wHwYDVR0jBBgwFoAU8wOtMgyC7nKegm48\n\
hlZ2wCmxIw8wDwYDVR0TAQH/BAUwAwEB/zAKBggqhkjOPQQDAgNJADBGAiEAmL0l\n\
BlKn68uAOl6X8Gf9MY3SLATWVQkzg41yGG0U0ZACIQCmxl5erdXTh55V7BTLLJfQ\n\
NVUKs2tg9NSSHQOjPxFaUQ==\n\
-----END CERTIFICATE-----\n\
";
