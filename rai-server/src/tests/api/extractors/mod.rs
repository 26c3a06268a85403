mod device_claims;
