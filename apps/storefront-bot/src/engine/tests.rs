use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use storefront_db::models::{cart_total, CartItem, Order, OrderStatus, ReceiptStatus};
use storefront_db::Database;
use storefront_shared::AdminAction;

use super::session::{ProfileStage, ShopStage, WalletStage};
use super::*;
use crate::gateway::{GatewayError, MessageRef};
use crate::i18n::label;

const ADMIN: i64 = 1;
const SUPPORT: i64 = 2;
const ALICE: i64 = 100;
const BOB: i64 = 200;

#[derive(Debug, Clone, PartialEq)]
enum Outbound {
    Text {
        to: i64,
        text: String,
        keyboard: Option<Keyboard>,
    },
    Photo {
        to: i64,
        image: String,
        keyboard: Option<Keyboard>,
    },
    Caption {
        message: MessageRef,
        caption: String,
    },
}

/// Records everything the engine sends; chosen recipients are unreachable.
#[derive(Default)]
struct RecordingGateway {
    sent: Mutex<Vec<Outbound>>,
    unreachable: Mutex<HashSet<i64>>,
}

impl RecordingGateway {
    fn fail_for(&self, id: i64) {
        self.unreachable.lock().unwrap().insert(id);
    }

    fn check(&self, to: i64) -> Result<(), GatewayError> {
        if self.unreachable.lock().unwrap().contains(&to) {
            return Err(GatewayError::Delivery {
                recipient: to,
                reason: "chat not found".into(),
            });
        }
        Ok(())
    }

    fn texts_to(&self, to: i64) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter_map(|o| match o {
                Outbound::Text { to: t, text, .. } if *t == to => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn last_text_to(&self, to: i64) -> Option<String> {
        self.texts_to(to).pop()
    }

    fn keyboards_to(&self, to: i64) -> Vec<Keyboard> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter_map(|o| match o {
                Outbound::Text { to: t, keyboard, .. } | Outbound::Photo { to: t, keyboard, .. }
                    if *t == to =>
                {
                    keyboard.clone()
                }
                _ => None,
            })
            .collect()
    }

    fn photos_to(&self, to: i64) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter_map(|o| match o {
                Outbound::Photo { to: t, image, .. } if *t == to => Some(image.clone()),
                _ => None,
            })
            .collect()
    }

    fn captions(&self) -> Vec<(MessageRef, String)> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter_map(|o| match o {
                Outbound::Caption { message, caption } => Some((*message, caption.clone())),
                _ => None,
            })
            .collect()
    }

    /// Callback payloads offered to `to` that start with `prefix`.
    fn payloads_to(&self, to: i64, prefix: &str) -> Vec<String> {
        self.keyboards_to(to)
            .iter()
            .flat_map(|k| k.callback_data().into_iter().map(str::to_string).collect::<Vec<_>>())
            .filter(|d| d.starts_with(prefix))
            .collect()
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn send_text(
        &self,
        to: i64,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), GatewayError> {
        self.check(to)?;
        self.sent.lock().unwrap().push(Outbound::Text {
            to,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }

    async fn send_photo(
        &self,
        to: i64,
        image: &str,
        _caption: Option<&str>,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), GatewayError> {
        self.check(to)?;
        self.sent.lock().unwrap().push(Outbound::Photo {
            to,
            image: image.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }

    async fn edit_caption(&self, message: MessageRef, caption: &str) -> Result<(), GatewayError> {
        self.check(message.chat_id)?;
        self.sent.lock().unwrap().push(Outbound::Caption {
            message,
            caption: caption.to_string(),
        });
        Ok(())
    }
}

struct Harness {
    engine: Engine,
    gateway: Arc<RecordingGateway>,
}

fn harness() -> Harness {
    harness_with(EngineSettings::default())
}

fn harness_with(settings: EngineSettings) -> Harness {
    let gateway = Arc::new(RecordingGateway::default());
    let engine = Engine::new(
        Database::in_memory(),
        Arc::new(InMemorySessionStore::new()),
        gateway.clone(),
        AdminService::new(vec![ADMIN], Some(SUPPORT)),
        settings,
    );
    Harness { engine, gateway }
}

fn en(msg: Msg) -> String {
    tr(Lang::En, &msg)
}

impl Harness {
    /// Registers the users with English as their language.
    async fn english(&self, users: &[i64]) {
        for &user in users {
            self.engine.db.users.set_language(user, Lang::En).await.unwrap();
        }
    }

    async fn send(&self, user: i64, event: Inbound) -> Ack {
        self.engine
            .handle(Envelope {
                sender: Sender::new(user),
                event,
            })
            .await
    }

    async fn text(&self, user: i64, text: &str) -> Ack {
        self.send(user, Inbound::Text(text.to_string())).await
    }

    async fn press(&self, user: i64, l: Label) -> Ack {
        self.text(user, label(Lang::En, l)).await
    }

    async fn contact(&self, user: i64, phone: &str) -> Ack {
        self.send(
            user,
            Inbound::Contact {
                phone: Some(phone.to_string()),
            },
        )
        .await
    }

    async fn photo(&self, user: i64, file_id: &str) -> Ack {
        self.send(
            user,
            Inbound::Photo {
                file_id: file_id.to_string(),
            },
        )
        .await
    }

    async fn callback(&self, user: i64, data: &str, message: Option<MessageRef>) -> Ack {
        self.send(
            user,
            Inbound::Callback {
                data: data.to_string(),
                message,
            },
        )
        .await
    }

    async fn session(&self, user: i64) -> Option<Session> {
        self.engine.sessions.get(user).await
    }

    async fn stage(&self, user: i64) -> Option<Stage> {
        self.session(user).await.map(|s| s.stage)
    }

    async fn balance(&self, user: i64) -> u64 {
        self.engine.db.users.get(user).await.map(|u| u.wallet_balance).unwrap_or(0)
    }

    /// Puts `qty` numbers of the first matching country in the cart.
    async fn add_numbers(&self, user: i64, country: &str, qty: u32) {
        self.press(user, Label::BuyNumber).await;
        self.press(user, Label::ShopNumber).await;
        self.text(user, country).await;
        self.text(user, &qty.to_string()).await;
    }

    async fn checkout(&self, user: i64) {
        self.press(user, Label::ViewCart).await;
        self.press(user, Label::Checkout).await;
    }
}

#[tokio::test]
async fn start_registers_user_and_resets_session() {
    let h = harness();
    h.press(ALICE, Label::Support).await;
    assert_eq!(h.stage(ALICE).await, Some(Stage::Support));

    h.send(
        ALICE,
        Inbound::Command {
            name: "start".into(),
            args: String::new(),
        },
    )
    .await;

    assert!(h.stage(ALICE).await.is_none());
    assert!(h.engine.db.users.get(ALICE).await.is_some());
    assert_eq!(h.gateway.last_text_to(ALICE), Some(tr(Lang::Fa, &Msg::Welcome)));
}

#[tokio::test]
async fn wallet_payment_rejected_when_balance_is_short() {
    let h = harness();
    h.english(&[ALICE]).await;

    h.add_numbers(ALICE, "🇺🇸 USA", 2).await;
    let session = h.session(ALICE).await.unwrap();
    assert_eq!(
        session.cart,
        vec![CartItem::Number {
            country: "🇺🇸 USA".into(),
            price: 40_000,
            qty: 2
        }]
    );

    h.checkout(ALICE).await;
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::ChoosePayment { total: 80_000 })));
    assert_eq!(h.stage(ALICE).await, Some(Stage::Shop(ShopStage::CheckoutConfirm)));

    h.press(ALICE, Label::PayWallet).await;
    assert_eq!(
        h.gateway.last_text_to(ALICE),
        Some(en(Msg::InsufficientBalance {
            balance: 0,
            total: 80_000
        }))
    );
    assert!(h.engine.db.orders.list_for_user(ALICE).await.is_empty());
    assert_eq!(h.balance(ALICE).await, 0);
    assert!(h.stage(ALICE).await.is_none());
}

#[tokio::test]
async fn wallet_payment_debits_and_records_paid_order() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.engine.db.users.credit(ALICE, 100_000).await.unwrap();

    h.add_numbers(ALICE, "🇺🇸 USA", 2).await;
    h.checkout(ALICE).await;
    h.press(ALICE, Label::PayWallet).await;

    assert_eq!(h.balance(ALICE).await, 20_000);
    let orders = h.engine.db.orders.list_for_user(ALICE).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::Paid);
    assert_eq!(orders[0].total, 80_000);

    let profile = h.engine.db.users.get(ALICE).await.unwrap();
    assert_eq!(profile.loyalty_points, 8);
    assert!(!profile.vip);

    let view = format!("view_order:{}", orders[0].order_id);
    assert_eq!(h.gateway.payloads_to(ADMIN, "view_order:"), vec![view]);
    assert!(h.stage(ALICE).await.is_none());
}

#[tokio::test]
async fn large_purchase_grants_vip() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.engine.db.users.credit(ALICE, 2_000_000).await.unwrap();

    h.add_numbers(ALICE, "🇮🇷 Iran", 7).await;
    h.checkout(ALICE).await;
    h.press(ALICE, Label::PayWallet).await;

    let profile = h.engine.db.users.get(ALICE).await.unwrap();
    assert_eq!(profile.wallet_balance, 950_000);
    assert_eq!(profile.loyalty_points, 105);
    assert!(profile.vip);
    assert!(h.gateway.texts_to(ALICE).contains(&en(Msg::BecameVip)));
}

#[tokio::test]
async fn unreachable_admin_does_not_undo_payment() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.gateway.fail_for(ADMIN);
    h.engine.db.users.credit(ALICE, 40_000).await.unwrap();

    h.add_numbers(ALICE, "🇨🇦 Canada", 1).await;
    h.checkout(ALICE).await;
    h.press(ALICE, Label::PayWallet).await;

    assert_eq!(h.balance(ALICE).await, 0);
    assert_eq!(h.engine.db.orders.list_for_user(ALICE).await.len(), 1);
}

#[tokio::test]
async fn bad_quantities_keep_the_stage() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.press(ALICE, Label::BuyNumber).await;
    h.press(ALICE, Label::ShopNumber).await;

    h.text(ALICE, "Atlantis").await;
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::PickCountryFromButtons)));
    assert_eq!(h.stage(ALICE).await, Some(Stage::Shop(ShopStage::ChooseCountry)));

    h.text(ALICE, "🇸🇦 Saudi Arabia — 100,000").await;
    for bad in ["abc", "0", "-2", "2.5"] {
        h.text(ALICE, bad).await;
        assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::InvalidQuantity)));
        assert_eq!(h.stage(ALICE).await, Some(Stage::Shop(ShopStage::ChooseQty)));
    }

    h.text(ALICE, "3").await;
    let session = h.session(ALICE).await.unwrap();
    assert_eq!(session.stage, Stage::Shop(ShopStage::ChooseType));
    assert_eq!(session.cart[0].subtotal(), 300_000);
}

#[tokio::test]
async fn stars_use_the_fixed_price_and_cart_survives_menu() {
    let h = harness();
    h.english(&[ALICE]).await;

    h.press(ALICE, Label::BuyStars).await;
    h.text(ALICE, "100").await;
    h.press(ALICE, Label::BuyNumber).await;

    let session = h.session(ALICE).await.unwrap();
    assert_eq!(session.stage, Stage::Shop(ShopStage::ChooseType));
    assert_eq!(
        session.cart,
        vec![CartItem::Stars {
            price: 1_500,
            qty: 100
        }]
    );

    h.press(ALICE, Label::Cart).await;
    assert_eq!(
        h.gateway.last_text_to(ALICE),
        Some(en(Msg::CartView {
            items: session.cart.clone(),
            total: 150_000
        }))
    );

    h.press(ALICE, Label::EmptyCart).await;
    assert!(h.session(ALICE).await.is_none());
    h.press(ALICE, Label::Cart).await;
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::CartEmpty)));
}

#[tokio::test]
async fn manual_checkout_receipt_is_credited_exactly_once() {
    let h = harness();
    h.english(&[ALICE, ADMIN]).await;

    h.add_numbers(ALICE, "🇨🇦 Canada", 1).await;
    h.checkout(ALICE).await;
    h.press(ALICE, Label::PayManual).await;
    assert_eq!(h.stage(ALICE).await, Some(Stage::Shop(ShopStage::AwaitContact)));

    h.contact(ALICE, "+989121234567").await;
    assert_eq!(h.stage(ALICE).await, Some(Stage::Shop(ShopStage::AwaitReceipt)));

    h.photo(ALICE, "photo-1").await;
    assert!(h.stage(ALICE).await.is_none());
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::ReceiptSentAdmin)));
    assert_eq!(h.gateway.photos_to(ADMIN), vec!["photo-1".to_string()]);

    let approve = h.gateway.payloads_to(ADMIN, "approve_receipt:").remove(0);
    let receipt_id = approve.trim_start_matches("approve_receipt:").to_string();
    let receipt = h.engine.db.receipts.get(&receipt_id).await.unwrap();
    assert_eq!(receipt.amount, 40_000);
    assert_eq!(receipt.phone.as_deref(), Some("+989121234567"));

    let card = MessageRef {
        chat_id: ADMIN,
        message_id: 77,
    };
    let ack = h.callback(ADMIN, &approve, Some(card)).await;
    assert_eq!(ack, Ack::text(en(Msg::ReceiptApprovedAck)));
    assert_eq!(h.balance(ALICE).await, 40_000);
    assert_eq!(
        h.gateway.last_text_to(ALICE),
        Some(en(Msg::ReceiptApproved { amount: 40_000 }))
    );
    assert_eq!(h.gateway.captions(), vec![(card, en(Msg::CaptionApproved))]);

    let again = h.callback(ADMIN, &approve, Some(card)).await;
    assert_eq!(again, Ack::text(en(Msg::ReceiptAlreadyResolved)));
    assert_eq!(h.balance(ALICE).await, 40_000);

    let reject = format!("reject_receipt:{}", receipt_id);
    let late = h.callback(ADMIN, &reject, None).await;
    assert_eq!(late, Ack::text(en(Msg::ReceiptAlreadyResolved)));
    assert_eq!(
        h.engine.db.receipts.get(&receipt_id).await.unwrap().status,
        ReceiptStatus::Approved
    );
}

#[tokio::test]
async fn unknown_receipt_is_reported() {
    let h = harness();
    h.english(&[ADMIN]).await;
    let ack = h.callback(ADMIN, "approve_receipt:RCP-nope", None).await;
    assert_eq!(ack, Ack::text(en(Msg::ReceiptNotFound)));
}

#[tokio::test]
async fn rejected_topup_leaves_wallet_alone() {
    let h = harness();
    h.english(&[ALICE, ADMIN]).await;

    h.press(ALICE, Label::Wallet).await;
    h.press(ALICE, Label::TopUp).await;
    h.text(ALICE, "seventy").await;
    assert_eq!(h.stage(ALICE).await, Some(Stage::Wallet(WalletStage::ChooseAmount)));

    h.text(ALICE, "100,000").await;
    assert_eq!(h.stage(ALICE).await, Some(Stage::Wallet(WalletStage::AwaitReceipt)));
    h.photo(ALICE, "photo-2").await;

    let reject = h.gateway.payloads_to(ADMIN, "reject_receipt:").remove(0);
    let receipt_id = reject.trim_start_matches("reject_receipt:").to_string();
    assert_eq!(h.engine.db.receipts.get(&receipt_id).await.unwrap().amount, 100_000);

    let ack = h.callback(ADMIN, &reject, None).await;
    assert_eq!(ack, Ack::text(en(Msg::ReceiptRejectedAck)));
    assert_eq!(h.balance(ALICE).await, 0);
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::ReceiptRejected)));
    assert_eq!(
        h.engine.db.receipts.get(&receipt_id).await.unwrap().resolved_by,
        Some(ADMIN)
    );
}

#[tokio::test]
async fn photos_outside_receipt_stages_are_refused() {
    let h = harness();
    h.english(&[ALICE]).await;

    h.photo(ALICE, "stray").await;
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::PhotoUnexpected)));

    h.press(ALICE, Label::Wallet).await;
    h.photo(ALICE, "stray").await;
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::PhotoNotAwaited)));
    assert_eq!(h.stage(ALICE).await, Some(Stage::Wallet(WalletStage::Menu)));
    assert!(h.gateway.photos_to(ADMIN).is_empty());
}

#[tokio::test]
async fn contact_outside_a_session_is_refused() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.contact(ALICE, "+100").await;
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::ContactNoSession)));

    h.press(ALICE, Label::BuyStars).await;
    h.send(ALICE, Inbound::Contact { phone: None }).await;
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::ContactInvalid)));
    assert_eq!(h.stage(ALICE).await, Some(Stage::Shop(ShopStage::ChooseStars)));
}

#[tokio::test]
async fn verification_code_finalizes_pending_order() {
    let h = harness();
    h.english(&[ALICE, ADMIN]).await;
    h.press(ALICE, Label::BuyStars).await;
    h.text(ALICE, "50").await;

    h.contact(ALICE, "+441234").await;
    let session = h.session(ALICE).await.unwrap();
    assert_eq!(session.stage, Stage::AwaitCode);
    let code = session.scratch.verification.unwrap().code;
    assert!(h.gateway.texts_to(ALICE).contains(&en(Msg::CodeIssued { code: code.clone() })));

    let wrong = if code == "000000" { "111111" } else { "000000" };
    h.text(ALICE, wrong).await;
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::InvalidCode)));
    assert_eq!(h.stage(ALICE).await, Some(Stage::AwaitCode));
    assert!(h.engine.db.orders.list_for_user(ALICE).await.is_empty());

    h.text(ALICE, &code).await;
    assert!(h.stage(ALICE).await.is_none());
    let orders = h.engine.db.orders.list_for_user(ALICE).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::PendingAdmin);
    assert_eq!(orders[0].total, 75_000);
    assert_eq!(orders[0].phone.as_deref(), Some("+441234"));
    assert_eq!(
        h.gateway.payloads_to(ADMIN, "approve_order:"),
        vec![format!("approve_order:{}", orders[0].order_id)]
    );
}

#[tokio::test]
async fn expired_code_is_replaced_without_an_order() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.press(ALICE, Label::BuyStars).await;
    h.text(ALICE, "10").await;
    h.contact(ALICE, "+441234").await;

    let mut session = h.session(ALICE).await.unwrap();
    let mut pending = session.scratch.verification.clone().unwrap();
    let old_code = pending.code.clone();
    pending.expires_at = Utc::now() - chrono::Duration::minutes(1);
    session.scratch.verification = Some(pending);
    h.engine.sessions.set(ALICE, session).await;

    h.text(ALICE, &old_code).await;

    assert!(h.engine.db.orders.list_for_user(ALICE).await.is_empty());
    let session = h.session(ALICE).await.unwrap();
    assert_eq!(session.stage, Stage::AwaitCode);
    let fresh = session.scratch.verification.unwrap();
    assert!(fresh.expires_at > Utc::now());
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::CodeExpired { code: fresh.code })));
}

#[tokio::test]
async fn far_future_expiry_does_not_overflow() {
    let h = harness_with(EngineSettings {
        code_expiry: chrono::Duration::MAX,
        ..EngineSettings::default()
    });
    h.english(&[ALICE]).await;
    h.press(ALICE, Label::BuyStars).await;
    h.text(ALICE, "10").await;
    h.contact(ALICE, "+441234").await;

    let session = h.session(ALICE).await.unwrap();
    assert_eq!(session.stage, Stage::AwaitCode);
    let pending = session.scratch.verification.unwrap();
    assert!(!pending.is_expired(Utc::now()));

    h.text(ALICE, &pending.code).await;
    assert_eq!(h.engine.db.orders.list_for_user(ALICE).await.len(), 1);
}

#[tokio::test]
async fn broadcast_reports_sent_and_failed() {
    let h = harness();
    h.english(&[ADMIN, ALICE, BOB]).await;
    h.gateway.fail_for(BOB);

    h.press(ADMIN, Label::Broadcast).await;
    assert_eq!(h.stage(ADMIN).await, Some(Stage::Broadcast));
    h.text(ADMIN, "Sale!").await;

    assert_eq!(
        h.gateway.last_text_to(ADMIN),
        Some(en(Msg::BroadcastReport { sent: 1, failed: 1 }))
    );
    assert_eq!(
        h.gateway.last_text_to(ALICE),
        Some(en(Msg::BroadcastBody {
            text: "Sale!".into()
        }))
    );
    let log = h.engine.db.broadcasts.list().await;
    assert_eq!(log.len(), 1);
    assert_eq!((log[0].admin_id, log[0].sent, log[0].failed), (ADMIN, 1, 1));
    assert_eq!(log[0].text, "Sale!");
}

#[tokio::test]
async fn non_admins_get_no_admin_powers() {
    let h = harness();
    h.english(&[ALICE]).await;

    h.press(ALICE, Label::Broadcast).await;
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::AdminOnly)));
    assert!(h.stage(ALICE).await.is_none());

    let ack = h.callback(ALICE, "approve_receipt:RCP-1", None).await;
    assert_eq!(ack, Ack::text(en(Msg::AdminOnly)));

    assert_eq!(h.callback(ALICE, "something_else", None).await, Ack::default());
}

#[tokio::test]
async fn support_message_reaches_support_and_admins() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.gateway.fail_for(SUPPORT);

    h.press(ALICE, Label::Support).await;
    h.text(ALICE, "my number does not work").await;

    let forwarded = tr(
        Lang::Fa,
        &Msg::SupportForward {
            from: ALICE,
            text: "my number does not work".into(),
        },
    );
    assert_eq!(h.gateway.last_text_to(ADMIN), Some(forwarded));
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::SupportSent)));
    assert!(h.stage(ALICE).await.is_none());
}

#[tokio::test]
async fn order_approval_is_idempotent() {
    let h = harness();
    h.english(&[ALICE, ADMIN]).await;
    let order = Order::new(
        ALICE,
        vec![CartItem::Stars {
            price: 1_500,
            qty: 20,
        }],
        OrderStatus::PendingAdmin,
        Some("+1".into()),
    );
    let order_id = order.order_id.clone();
    h.engine.db.orders.create(order).await.unwrap();

    let ack = h.callback(ADMIN, &format!("view_order:{}", order_id), None).await;
    assert_eq!(ack, Ack::text(en(Msg::OrderSentAck)));
    let details = h.gateway.last_text_to(ADMIN).unwrap();
    assert!(details.contains(&order_id));
    assert!(details.contains("pending_admin"));

    let approve = format!("approve_order:{}", order_id);
    assert_eq!(
        h.callback(ADMIN, &approve, None).await,
        Ack::text(en(Msg::OrderApprovedAck))
    );
    assert_eq!(
        h.gateway.last_text_to(ALICE),
        Some(en(Msg::OrderApprovedUser {
            order_id: order_id.clone()
        }))
    );
    assert_eq!(
        h.callback(ADMIN, &approve, None).await,
        Ack::text(en(Msg::OrderAlreadyApproved))
    );
    assert_eq!(h.gateway.texts_to(ALICE).len(), 1);

    assert_eq!(
        h.callback(ADMIN, "view_order:ORD-missing", None).await,
        Ack::text(en(Msg::OrderNotFound))
    );
}

#[tokio::test]
async fn menu_entries_interrupt_any_flow() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.press(ALICE, Label::Support).await;
    h.press(ALICE, Label::Wallet).await;
    assert_eq!(h.stage(ALICE).await, Some(Stage::Wallet(WalletStage::Menu)));

    h.send(
        ALICE,
        Inbound::Command {
            name: "cancel".into(),
            args: String::new(),
        },
    )
    .await;
    assert!(h.stage(ALICE).await.is_none());
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::Cancelled)));
}

#[tokio::test]
async fn language_change_answers_in_the_new_language() {
    let h = harness();
    h.press(ALICE, Label::Language).await;
    assert_eq!(
        h.stage(ALICE).await,
        Some(Stage::Profile(ProfileStage::AwaitLanguage))
    );

    h.text(ALICE, Lang::Ar.native_label()).await;
    assert_eq!(h.engine.db.users.language(ALICE).await, Lang::Ar);
    assert_eq!(h.gateway.last_text_to(ALICE), Some(tr(Lang::Ar, &Msg::ProfileUpdated)));
    assert!(h.stage(ALICE).await.is_none());
}

#[tokio::test]
async fn invalid_language_choice_changes_nothing() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.press(ALICE, Label::Language).await;

    h.text(ALICE, "Klingon").await;
    assert_eq!(h.engine.db.users.language(ALICE).await, Lang::En);
    assert_eq!(h.gateway.last_text_to(ALICE), Some(en(Msg::InvalidLanguage)));
    assert_eq!(
        h.gateway.keyboards_to(ALICE).last(),
        Some(&keyboards::main_menu(Lang::En))
    );
    assert!(h.stage(ALICE).await.is_none());
}

#[tokio::test]
async fn cart_total_sums_every_addition() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.add_numbers(ALICE, "🇺🇸 USA", 2).await;
    h.press(ALICE, Label::BuyStars).await;
    h.text(ALICE, "10").await;
    h.add_numbers(ALICE, "🇮🇷 Iran", 1).await;

    let cart = h.session(ALICE).await.unwrap().cart;
    assert_eq!(cart.len(), 3);
    let summed: u64 = cart.iter().map(CartItem::subtotal).sum();
    assert_eq!(summed, 80_000 + 15_000 + 150_000);
    assert_eq!(cart_total(&cart), summed);

    h.press(ALICE, Label::Cart).await;
    assert_eq!(
        h.gateway.last_text_to(ALICE),
        Some(en(Msg::CartView {
            items: cart,
            total: 245_000
        }))
    );
}

#[tokio::test]
async fn profile_edit_collects_name_then_contact() {
    let h = harness();
    h.english(&[ALICE]).await;
    h.press(ALICE, Label::EditProfile).await;
    h.text(ALICE, "Sara Ahmadi").await;
    assert_eq!(
        h.stage(ALICE).await,
        Some(Stage::Profile(ProfileStage::AwaitContact))
    );

    h.contact(ALICE, "+989350000000").await;
    let profile = h.engine.db.users.get(ALICE).await.unwrap();
    assert_eq!(profile.first_name, "Sara");
    assert_eq!(profile.last_name, "Ahmadi");
    assert_eq!(profile.phone, "+989350000000");
    assert!(h.stage(ALICE).await.is_none());

    h.press(ALICE, Label::Profile).await;
    let card = h.gateway.last_text_to(ALICE).unwrap();
    assert!(card.contains("Sara"));
    assert!(card.contains("+989350000000"));
}
