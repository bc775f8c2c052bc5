//! End-to-end tests at the wire document level.
//!
//! Each test file covers a specific scenario, decoding wire bytes through a
//! fully registered context and checking the classified outcome.

#![cfg(test)]


mod test_concurrent_registry;
mod test_ecc_scenario;
mod test_equality;
mod test_factory_availability;
mod test_internal_error;
mod test_missing_fields;
mod test_resolution_order;
mod test_revocation;
mod test_unidentified_scheme;
mod test_x509;
