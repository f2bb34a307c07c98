//! Endpoint rule resolution

use crate::{BindingError, Result};
use serde::{Deserialize, Serialize};

/// Endpoint rule a product uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointType {
    /// `<product>.<region>.aliyuncs.com`
    Regional,
    /// `<product>.aliyuncs.com`
    Central,
}

/// Build the endpoint host for `product` from the endpoint rule.
///
/// The `public` network is the default and adds nothing to the host.
pub fn endpoint_rule(
    product: &str,
    region_id: Option<&str>,
    endpoint_type: EndpointType,
    network: Option<&str>,
    suffix: Option<&str>,
) -> Result<String> {
    let network = match network {
        Some(n) if !n.is_empty() && n != "public" => format!("-{}", n),
        _ => String::new(),
    };
    let suffix = match suffix {
        Some(s) if !s.is_empty() => format!("-{}", s),
        _ => String::new(),
    };

    let host = match endpoint_type {
        EndpointType::Regional => {
            let region = region_id.filter(|r| !r.is_empty()).ok_or_else(|| {
                BindingError::Config(
                    "RegionId is empty, please set a valid RegionId".to_string(),
                )
            })?;
            format!("{}{}{}.{}.aliyuncs.com", product, suffix, network, region)
        },
        EndpointType::Central => format!("{}{}{}.aliyuncs.com", product, suffix, network),
    };

    Ok(host.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_rule() {
        assert_eq!(
            endpoint_rule("imm", Some("cn-hangzhou"), EndpointType::Regional, None, None).unwrap(),
            "imm.cn-hangzhou.aliyuncs.com"
        );
    }

    #[test]
    fn test_network_and_suffix() {
        assert_eq!(
            endpoint_rule(
                "IMM",
                Some("cn-hangzhou"),
                EndpointType::Regional,
                Some("vpc"),
                Some("share")
            )
            .unwrap(),
            "imm-share-vpc.cn-hangzhou.aliyuncs.com"
        );
        assert_eq!(
            endpoint_rule("imm", None, EndpointType::Central, Some("public"), None).unwrap(),
            "imm.aliyuncs.com"
        );
    }

    #[test]
    fn test_regional_requires_region() {
        let err = endpoint_rule("imm", None, EndpointType::Regional, None, None).unwrap_err();
        assert!(err.to_string().contains("RegionId is empty"));
    }
}
