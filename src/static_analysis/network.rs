//! IP address disclosure analysis.
//!
//! Scans the string pool for literal IPv4 and IPv6 addresses and separates the private ones
//! from the public ones.

use crate::{
    criticality::Criticality, model::ProgramModel, print_vulnerability, results::Results, Config,
};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref IPV4: Regex = Regex::new(
        r"^(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)$"
    )
    .unwrap();
    static ref IPV6: Regex = Regex::new(
        r"(?x)^(?:
            (?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}
            |(?:[0-9a-fA-F]{1,4}:){1,7}:
            |(?:[0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}
            |(?:[0-9a-fA-F]{1,4}:){1,5}(?::[0-9a-fA-F]{1,4}){1,2}
            |(?:[0-9a-fA-F]{1,4}:){1,4}(?::[0-9a-fA-F]{1,4}){1,3}
            |(?:[0-9a-fA-F]{1,4}:){1,3}(?::[0-9a-fA-F]{1,4}){1,4}
            |(?:[0-9a-fA-F]{1,4}:){1,2}(?::[0-9a-fA-F]{1,4}){1,5}
            |[0-9a-fA-F]{1,4}:(?::[0-9a-fA-F]{1,4}){1,6}
            |:(?:(?::[0-9a-fA-F]{1,4}){1,7}|:)
        )$"
    )
    .unwrap();
    static ref PRIVATE: Regex = Regex::new(
        r"(?ix)^(?:
            (?:0|10|127)\.
            |169\.254\.
            |172\.(?:1[6-9]|2\d|3[01])\.
            |192\.168\.
            |::1?$
            |f[cd][0-9a-f]{0,2}:
            |fe[89ab][0-9a-f]:
        )"
    )
    .unwrap();
}

/// IP addresses found in the string pool.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct IpDisclosure {
    /// Public IPv4 addresses.
    ipv4: Vec<String>,
    /// Public IPv6 addresses.
    ipv6: Vec<String>,
    /// Private, loopback and link-local addresses of both families.
    private: Vec<String>,
}

impl IpDisclosure {
    /// Gets the public IPv4 addresses.
    pub fn ipv4(&self) -> &[String] {
        &self.ipv4
    }

    /// Gets the public IPv6 addresses.
    pub fn ipv6(&self) -> &[String] {
        &self.ipv6
    }

    /// Gets the private addresses.
    pub fn private(&self) -> &[String] {
        &self.private
    }

    /// Total number of addresses found.
    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len() + self.private.len()
    }

    /// Whether no address was found.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scans the string pool of the program.
///
/// Every matching literal of the pool is reported, so a value present twice in the pool is
/// reported twice.
pub fn scan<M: ProgramModel + ?Sized>(program: &M) -> IpDisclosure {
    let mut disclosure = IpDisclosure::default();

    for string in program.find_strings(&IPV4) {
        let value = string.value().to_owned();
        if PRIVATE.is_match(&value) {
            disclosure.private.push(value);
        } else {
            disclosure.ipv4.push(value);
        }
    }

    for string in program.find_strings(&IPV6) {
        let value = string.value().to_owned();
        if PRIVATE.is_match(&value) {
            disclosure.private.push(value);
        } else {
            disclosure.ipv6.push(value);
        }
    }

    disclosure
}

/// Runs the IP disclosure analysis.
pub fn analysis<M: ProgramModel + ?Sized>(program: &M, config: &Config, results: &mut Results) {
    let disclosure = scan(program);
    debug!(
        "{} public IPv4, {} public IPv6 and {} private addresses found",
        disclosure.ipv4.len(),
        disclosure.ipv6.len(),
        disclosure.private.len()
    );

    if !config.is_quiet() && Criticality::Low >= config.min_criticality() {
        for address in disclosure.ipv4.iter().chain(&disclosure.ipv6) {
            print_vulnerability(
                format!("public IP address disclosed: {}", address),
                Criticality::Low,
            );
        }
    }

    results.set_ip_disclosure(disclosure);
}

#[cfg(test)]
mod tests {
    use super::{scan, IPV4, IPV6, PRIVATE};
    use crate::model::Program;

    #[test]
    fn it_classifies_private_and_public_addresses() {
        let mut builder = Program::builder();
        builder.string("10.0.0.5", &[]);
        builder.string("8.8.8.8", &[]);
        builder.string("::1", &[]);
        builder.string("2001:4860:4860::8888", &[]);
        builder.string("fe80::1ff:fe23:4567:890a", &[]);
        builder.string("192.168.1.300", &[]);
        builder.string("https://example.com", &[]);
        let disclosure = scan(&builder.build());

        assert_eq!(disclosure.ipv4(), &["8.8.8.8".to_owned()]);
        assert_eq!(disclosure.ipv6(), &["2001:4860:4860::8888".to_owned()]);
        assert_eq!(
            disclosure.private(),
            &[
                "10.0.0.5".to_owned(),
                "::1".to_owned(),
                "fe80::1ff:fe23:4567:890a".to_owned()
            ]
        );
    }

    #[test]
    fn it_keeps_duplicates() {
        let mut builder = Program::builder();
        builder.string("8.8.8.8", &[]);
        builder.string("8.8.8.8", &[]);
        let disclosure = scan(&builder.build());

        assert_eq!(disclosure.ipv4().len(), 2);
        assert_eq!(disclosure.len(), 2);
    }

    #[test]
    fn it_matches_whole_literals() {
        assert!(IPV4.is_match("172.16.254.1"));
        assert!(!IPV4.is_match("1.2.3"));
        assert!(!IPV4.is_match("version 1.2.3.4"));
        assert!(IPV6.is_match("::"));
        assert!(IPV6.is_match("fd12:3456:789a:1::1"));
        assert!(!IPV6.is_match("std::string"));

        assert!(PRIVATE.is_match("172.31.0.1"));
        assert!(!PRIVATE.is_match("172.32.0.1"));
        assert!(PRIVATE.is_match("fd12:3456:789a:1::1"));
        assert!(!PRIVATE.is_match("2001:db8::1"));
    }
}
