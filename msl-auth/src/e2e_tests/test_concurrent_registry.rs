//! Parsing stays consistent while factories are removed and re-registered.

use std::sync::Arc;

use crate::e2e_tests::helpers::*;
use crate::entityauth::{EntityAuthenticationData, EntityAuthenticationScheme};

#[test]
fn test_parse_during_registry_churn() {
    let test = TestHarness::new();
    let factory = test
        .ctx
        .entity_authentication_factory(EntityAuthenticationScheme::Ecc)
        .expect("registered");
    let ctx = Arc::new(test.ctx);
    let bytes = envelope("ECC", ECC_AUTHDATA);
    let document = ctx.encoder().parse_object(&bytes).expect("valid document");

    let parsers: Vec<_> = (0..4)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            let document = document.clone();
            test.runtime.spawn(async move {
                for _ in 0..200 {
                    match EntityAuthenticationData::parse(&ctx, &document).await {
                        Ok(data) => assert_eq!(data.identity(), ECC_ESN),
                        Err(e) => assert_eq!(e.error(), MslError::EntityAuthFactoryNotFound),
                    }
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for _ in 0..200 {
        ctx.remove_entity_authentication_factory(EntityAuthenticationScheme::Ecc);
        ctx.add_entity_authentication_factory(Arc::clone(&factory));
    }

    for parser in parsers {
        test.runtime.block_on(parser).expect("parser task");
    }
    assert!(
        test.runtime
            .block_on(EntityAuthenticationData::parse(&ctx, &document))
            .is_ok()
    );
}
