mod common;

use chrono::NaiveDate;
use common::{oy_mock, setup};
use oy_core::{Amount, CheckoutInvoice, CheckoutStep, InvoiceItem, OyError, PaymentCheckout};
use serde_json::json;
use wiremock::matchers::{any, body_json, query_param};
use wiremock::{Mock, ResponseTemplate};

fn checkout() -> PaymentCheckout {
    PaymentCheckout::builder()
        .partner_trx_id("CO-1")
        .description("Order #1")
        .sender_name("Budi")
        .amount(Amount::from(15_000u64))
        .email("budi@example.com")
        .phone_number("08123456789")
        .step(CheckoutStep::InputPersonalInfo)
        .expiration(
            NaiveDate::from_ymd_opt(2024, 9, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
        )
        .build()
}

#[tokio::test]
async fn test_create_payment_checkout() {
    let (server, client) = setup().await;

    oy_mock("POST", "/payment-checkout/create-v2")
        .and(body_json(json!({
            "partner_trx_id": "CO-1",
            "description": "Order #1",
            "sender_name": "Budi",
            "amount": "15000",
            "email": "budi@example.com",
            "phone_number": "08123456789",
            "is_open": false,
            "step": "input-personal-info",
            "include_admin_fee": false,
            "list_enabled_banks": "002,008,009,013,022",
            "list_enabled_ewallet": "shopeepay_ewallet,dana_ewallet,linkaja_ewallet,ovo_ewallet",
            "expiration": "2024-09-01 12:30:00"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "url": "https://pay-dev.oyindonesia.com/abc",
            "payment_link_id": "abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.create_payment_checkout(&checkout()).await.unwrap();
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["payment_link_id"], json!("abc"));
}

#[tokio::test]
async fn test_create_invoice() {
    let (server, client) = setup().await;

    oy_mock("POST", "/payment-checkout/create-invoice")
        .and(body_json(json!({
            "partner_trx_id": "CO-1",
            "description": "Order #1",
            "sender_name": "Budi",
            "amount": "15000",
            "email": "budi@example.com",
            "phone_number": "08123456789",
            "is_open": false,
            "step": "input-personal-info",
            "include_admin_fee": false,
            "list_enabled_banks": "002,008,009,013,022",
            "list_enabled_ewallet": "shopeepay_ewallet,dana_ewallet,linkaja_ewallet,ovo_ewallet",
            "expiration": "2024-09-01 12:30:00",
            "partner_user_id": "user-77",
            "full_name": "Budi Santoso",
            "is_va_lifetime": true,
            "invoice_items": [{
                "item": "Coffee beans",
                "description": "1kg",
                "quantity": 3,
                "date_of_purchase": "2024-08-30",
                "price_per_item": "5000"
            }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let item = InvoiceItem::builder()
        .item("Coffee beans")
        .description("1kg")
        .quantity(3)
        .date_of_purchase(NaiveDate::from_ymd_opt(2024, 8, 30).unwrap())
        .price_per_item(Amount::from(5_000u64))
        .build();

    let invoice = CheckoutInvoice::builder()
        .checkout(checkout())
        .partner_user_id("user-77")
        .full_name("Budi Santoso")
        .is_va_lifetime(true)
        .invoice_items(vec![item])
        .build();

    client.create_invoice(&invoice).await.unwrap();
}

#[tokio::test]
async fn test_get_payment_status() {
    let (server, client) = setup().await;

    oy_mock("GET", "/payment-checkout/status")
        .and(query_param("partner_trx_id", "CO-1"))
        .and(query_param("send_callback", "false"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.get_payment_status("CO-1", false).await.unwrap();
}

#[tokio::test]
async fn test_payment_link_get_and_delete_share_path() {
    let (server, client) = setup().await;

    oy_mock("GET", "/payment-checkout/link-123")
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    oy_mock("DELETE", "/payment-checkout/link-123")
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.get_payment_link("link-123").await.unwrap();
    client.delete_payment_link("link-123").await.unwrap();
}

#[tokio::test]
async fn test_payment_link_id_stays_one_segment() {
    let (server, client) = setup().await;

    oy_mock("DELETE", "/payment-checkout/a%2Fb")
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    oy_mock("GET", "/payment-checkout/x%3Fy")
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    oy_mock("GET", "/payment-checkout/abc%3Fx=1")
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_payment_link("a/b").await.unwrap();
    client.get_payment_link("x?y").await.unwrap();
    client.get_payment_link("abc?x=1").await.unwrap();
}

#[tokio::test]
async fn test_dot_payment_link_id_never_sent() {
    let (server, client) = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.delete_payment_link("..").await.unwrap_err();
    assert!(matches!(err, OyError::InvalidId(_)));

    let err = client.get_payment_link(".").await.unwrap_err();
    assert!(matches!(err, OyError::InvalidId(_)));
}
