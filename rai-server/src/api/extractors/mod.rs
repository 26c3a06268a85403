pub mod device_claims;
