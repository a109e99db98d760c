mod common;

use common::{oy_mock, setup};
use oy_core::{CreateVirtualAccount, Decimal, UpdateVirtualAccount};
use serde_json::json;
use std::str::FromStr;
use wiremock::matchers::{body_json, query_param};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_create_virtual_account() {
    let (server, client) = setup().await;

    oy_mock("POST", "/generate-static-va")
        .and(body_json(json!({
            "partner_user_id": "user-77",
            "bank_code": "002",
            "amount": "50000.50",
            "is_open": false,
            "is_single_use": true,
            "expiration_time": 60,
            "is_lifetime": false,
            "username_display": "Toko Budi",
            "email": "budi@example.com",
            "partner_trx_id": "VA-TRX-1",
            "trx_counter": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1414255-12121-21212121-212121",
            "status": { "code": "000" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let va = CreateVirtualAccount::builder()
        .partner_user_id("user-77")
        .bank_code("002")
        .amount(Decimal::from_str("50000.50").unwrap())
        .is_open(false)
        .is_single_use(true)
        .expiration_time(60)
        .username_display("Toko Budi")
        .email("budi@example.com")
        .partner_trx_id("VA-TRX-1")
        .trx_counter(1)
        .build();

    let response = client.create_virtual_account(&va).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_virtual_account_info_and_update() {
    let (server, client) = setup().await;

    oy_mock("GET", "/static-virtual-account/va-7f3c")
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    oy_mock("PUT", "/static-virtual-account/va-7f3c")
        .and(body_json(json!({
            "amount": "75000",
            "is_single_use": false,
            "is_lifetime": true,
            "partner_trx_id": "VA-TRX-2",
            "trx_counter": -1
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.get_virtual_account_info("va-7f3c").await.unwrap();

    let update = UpdateVirtualAccount::builder()
        .amount(Decimal::new(75_000, 0))
        .is_lifetime(true)
        .partner_trx_id("VA-TRX-2")
        .build();
    client
        .update_virtual_account_info("va-7f3c", &update)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_virtual_account_lists() {
    let (server, client) = setup().await;

    oy_mock("GET", "/static-virtual-account")
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    oy_mock("GET", "/va-tx-history/va-7f3c")
        .and(query_param("offset", "10"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.get_list_virtual_account(0, 10).await.unwrap();
    client.get_list_va_transaction("va-7f3c", 10, 5).await.unwrap();
}

#[tokio::test]
async fn test_virtual_account_id_cannot_escape_path() {
    let (server, client) = setup().await;

    oy_mock("GET", "/static-virtual-account/..%2F..%2Fbalance")
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    oy_mock("GET", "/va-tx-history/va%2F1")
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .get_virtual_account_info("../../balance")
        .await
        .unwrap();
    client.get_list_va_transaction("va/1", 0, 10).await.unwrap();
}
