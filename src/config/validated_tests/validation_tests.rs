//! Tests for value validation and defaults.

use crate::hosted::CredentialError;

use super::*;

mod defaults {
    use super::*;

    #[test]
    fn bare_cli_yields_start_with_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

        assert_eq!(config.action, Action::Start);
        assert_eq!(config.miniport_service, "vwifimp");
        assert!(config.ssid.is_none());
        assert!(config.uplink.is_none());
        assert!(config.candidate_filter.is_empty());
        assert!(config.config_file.is_none());
    }

    #[test]
    fn toml_overrides_miniport_service() {
        let toml = toml(
            r#"
            [hosted]
            miniport_service = "  mywifi  "
        "#,
        );

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.miniport_service, "mywifi");
    }

    #[test]
    fn cli_values_are_carried() {
        let config =
            ValidatedConfig::from_raw(&cli(&["stop", "--uplink", "2", "-v"]), None).unwrap();

        assert_eq!(config.action, Action::Stop);
        assert_eq!(config.uplink.as_deref(), Some("2"));
        assert!(config.verbose);
    }
}

mod ssid {
    use super::*;

    #[test]
    fn valid_ssid_is_accepted() {
        let config = ValidatedConfig::from_raw(&cli(&["--ssid", "MyHotspot"]), None).unwrap();
        assert_eq!(config.ssid.as_deref(), Some("MyHotspot"));
    }

    #[test]
    fn short_ssid_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--ssid", "ab"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidSsid(CredentialError::SsidTooShort(2)))
        ));
    }

    #[test]
    fn long_ssid_is_rejected() {
        let long = "x".repeat(33);
        let result = ValidatedConfig::from_raw(&cli(&["--ssid", &long]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidSsid(CredentialError::SsidTooLong(33)))
        ));
    }

    #[test]
    fn ssid_over_32_bytes_is_rejected_before_prompting() {
        let ssid = "Café-Straße-Wohnzimmer-Über-Netz";
        let result = ValidatedConfig::from_raw(&cli(&["--ssid", ssid]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidSsid(CredentialError::SsidTooLong(n))) if n == ssid.len()
        ));
    }
}

#[test]
fn empty_miniport_service_is_rejected() {
    let toml = toml(
        r#"
        [hosted]
        miniport_service = " "
    "#,
    );

    let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

    assert!(matches!(result, Err(ConfigError::EmptyServiceName)));
}

#[test]
fn display_summarizes_without_secrets() {
    let config = ValidatedConfig::from_raw(&cli(&["--ssid", "MyHotspot"]), None).unwrap();
    let text = config.to_string();

    assert!(text.contains("action: start"));
    assert!(text.contains("ssid: MyHotspot"));
    assert!(text.contains("uplink: <prompt>"));
    assert!(text.contains("miniport_service: vwifimp"));
}
