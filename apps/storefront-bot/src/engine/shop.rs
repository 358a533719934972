use anyhow::Result;
use storefront_db::models::{cart_total, CartItem, Order, OrderStatus};
use storefront_db::repositories::WalletCharge;
use storefront_shared::catalog::{match_country, parse_positive};
use storefront_shared::PRICE_PER_STAR;
use tracing::info;

use super::session::{Session, ShopStage, Stage};
use super::{Engine, Step, Turn};
use crate::bot::keyboards;
use crate::i18n::{Label, Msg};

/// Flows started from the main menu keep whatever is already in the cart.
fn carried_cart(current: Option<&Session>) -> Vec<CartItem> {
    current.map(|s| s.cart.clone()).unwrap_or_default()
}

fn parse_qty(text: &str) -> Option<u32> {
    parse_positive(text).and_then(|n| u32::try_from(n).ok())
}

impl Engine {
    pub(super) async fn open_shop(&self, turn: Turn, current: Option<&Session>) {
        let session = Session::with_cart(Stage::Shop(ShopStage::ChooseType), carried_cart(current));
        self.sessions.set(turn.user, session).await;
        self.say(turn, Msg::ShopChooseType, Some(keyboards::shop_menu(turn.lang)))
            .await;
    }

    pub(super) async fn open_stars(&self, turn: Turn, current: Option<&Session>) {
        let session = Session::with_cart(Stage::Shop(ShopStage::ChooseStars), carried_cart(current));
        self.sessions.set(turn.user, session).await;
        self.say(turn, Msg::AskStars, Some(keyboards::back_only(turn.lang)))
            .await;
    }

    pub(super) async fn open_cart(&self, turn: Turn, current: Option<&Session>) {
        let mut session = Session::with_cart(Stage::Shop(ShopStage::CartReview), carried_cart(current));
        let step = self.show_cart(turn, &mut session).await;
        self.apply(turn.user, session, step).await;
    }

    async fn show_cart(&self, turn: Turn, session: &mut Session) -> Step {
        if session.cart.is_empty() {
            self.say(turn, Msg::CartEmpty, Some(keyboards::main_menu(turn.lang)))
                .await;
            return Step::End;
        }
        let msg = Msg::CartView {
            items: session.cart.clone(),
            total: cart_total(&session.cart),
        };
        self.say(turn, msg, Some(keyboards::cart_review(turn.lang))).await;
        Step::Goto(Stage::Shop(ShopStage::CartReview))
    }

    async fn back_to_shop(&self, turn: Turn) -> Step {
        self.say(turn, Msg::ShopChooseType, Some(keyboards::shop_menu(turn.lang)))
            .await;
        Step::Goto(Stage::Shop(ShopStage::ChooseType))
    }

    pub(super) async fn shop_text(
        &self,
        turn: Turn,
        session: &mut Session,
        stage: ShopStage,
        text: &str,
    ) -> Result<Step> {
        let label = Label::parse(text);
        let step = match stage {
            ShopStage::ChooseType => match label {
                Some(Label::ShopNumber) => {
                    self.say(turn, Msg::ChooseCountry, Some(keyboards::country_keyboard(turn.lang)))
                        .await;
                    Step::Goto(Stage::Shop(ShopStage::ChooseCountry))
                }
                Some(Label::ShopStars) => {
                    self.say(turn, Msg::AskStars, Some(keyboards::back_only(turn.lang)))
                        .await;
                    Step::Goto(Stage::Shop(ShopStage::ChooseStars))
                }
                Some(Label::ViewCart) => self.show_cart(turn, session).await,
                Some(Label::Back) => {
                    self.say(turn, Msg::BackToMainMenu, Some(keyboards::main_menu(turn.lang)))
                        .await;
                    Step::End
                }
                _ => self.back_to_shop(turn).await,
            },

            ShopStage::ChooseCountry => {
                if label == Some(Label::Back) {
                    return Ok(self.back_to_shop(turn).await);
                }
                match match_country(text) {
                    Some(country) => {
                        session.scratch.pending_country = Some(country.label.to_string());
                        session.scratch.pending_price = Some(country.price);
                        let msg = Msg::CountrySelected {
                            country: country.label.to_string(),
                            price: country.price,
                        };
                        self.say(turn, msg, Some(keyboards::quantity_keyboard(turn.lang)))
                            .await;
                        Step::Goto(Stage::Shop(ShopStage::ChooseQty))
                    }
                    None => {
                        self.say(turn, Msg::PickCountryFromButtons, Some(keyboards::country_keyboard(turn.lang)))
                            .await;
                        Step::Stay
                    }
                }
            }

            ShopStage::ChooseQty => {
                if label == Some(Label::Back) {
                    self.say(turn, Msg::ChooseCountry, Some(keyboards::country_keyboard(turn.lang)))
                        .await;
                    return Ok(Step::Goto(Stage::Shop(ShopStage::ChooseCountry)));
                }
                let (Some(country), Some(price)) = (
                    session.scratch.pending_country.take(),
                    session.scratch.pending_price.take(),
                ) else {
                    self.say(turn, Msg::ChooseCountry, Some(keyboards::country_keyboard(turn.lang)))
                        .await;
                    return Ok(Step::Goto(Stage::Shop(ShopStage::ChooseCountry)));
                };
                match parse_qty(text) {
                    Some(qty) => {
                        session.cart.push(CartItem::Number { country, price, qty });
                        self.say(turn, Msg::CartAdded, Some(keyboards::after_add(turn.lang)))
                            .await;
                        Step::Goto(Stage::Shop(ShopStage::ChooseType))
                    }
                    None => {
                        session.scratch.pending_country = Some(country);
                        session.scratch.pending_price = Some(price);
                        self.say(turn, Msg::InvalidQuantity, Some(keyboards::quantity_keyboard(turn.lang)))
                            .await;
                        Step::Stay
                    }
                }
            }

            ShopStage::ChooseStars => {
                if label == Some(Label::Back) {
                    return Ok(self.back_to_shop(turn).await);
                }
                match parse_qty(text) {
                    Some(qty) => {
                        session.cart.push(CartItem::Stars {
                            price: PRICE_PER_STAR,
                            qty,
                        });
                        self.say(turn, Msg::CartAdded, Some(keyboards::after_add(turn.lang)))
                            .await;
                        Step::Goto(Stage::Shop(ShopStage::ChooseType))
                    }
                    None => {
                        self.say(turn, Msg::InvalidStars, Some(keyboards::back_only(turn.lang)))
                            .await;
                        Step::Stay
                    }
                }
            }

            ShopStage::CartReview => match label {
                Some(Label::EmptyCart) => {
                    session.cart.clear();
                    self.say(turn, Msg::CartCleared, Some(keyboards::main_menu(turn.lang)))
                        .await;
                    Step::End
                }
                Some(Label::Checkout) if !session.cart.is_empty() => {
                    let total = cart_total(&session.cart);
                    session.scratch.checkout_total = Some(total);
                    self.say(turn, Msg::ChoosePayment { total }, Some(keyboards::payment_methods(turn.lang)))
                        .await;
                    Step::Goto(Stage::Shop(ShopStage::CheckoutConfirm))
                }
                Some(Label::Back) => self.back_to_shop(turn).await,
                _ => self.show_cart(turn, session).await,
            },

            ShopStage::CheckoutConfirm => match label {
                Some(Label::PayWallet) => self.pay_with_wallet(turn, session).await?,
                Some(Label::PayManual) => {
                    session.scratch.charge_amount = session.scratch.checkout_total;
                    self.say(turn, Msg::SendContact, Some(keyboards::contact_request(turn.lang)))
                        .await;
                    Step::Goto(Stage::Shop(ShopStage::AwaitContact))
                }
                Some(Label::Back) => self.back_to_shop(turn).await,
                _ => {
                    let total = session
                        .scratch
                        .checkout_total
                        .unwrap_or_else(|| cart_total(&session.cart));
                    self.say(turn, Msg::ChoosePayment { total }, Some(keyboards::payment_methods(turn.lang)))
                        .await;
                    Step::Stay
                }
            },

            ShopStage::AwaitContact => match label {
                Some(Label::Cancel | Label::Back) => self.cancel(turn).await,
                _ => {
                    self.say(turn, Msg::SendContact, Some(keyboards::contact_request(turn.lang)))
                        .await;
                    Step::Stay
                }
            },

            ShopStage::AwaitReceipt => match label {
                Some(Label::Cancel | Label::Back) => self.cancel(turn).await,
                _ => {
                    self.say(turn, Msg::SendReceipt, Some(keyboards::cancel_only(turn.lang)))
                        .await;
                    Step::Stay
                }
            },
        };
        Ok(step)
    }

    /// Debits the frozen checkout total and records a paid order. Loyalty points
    /// are awarded in the same store update as the debit.
    async fn pay_with_wallet(&self, turn: Turn, session: &mut Session) -> Result<Step> {
        if session.cart.is_empty() {
            self.say(turn, Msg::CartEmpty, Some(keyboards::main_menu(turn.lang)))
                .await;
            return Ok(Step::End);
        }
        let total = session
            .scratch
            .checkout_total
            .unwrap_or_else(|| cart_total(&session.cart));

        let (points_earned, became_vip) = match self.db.users.charge_wallet(turn.user, total).await? {
            WalletCharge::Insufficient { balance } => {
                self.say(turn, Msg::InsufficientBalance { balance, total }, Some(keyboards::main_menu(turn.lang)))
                    .await;
                return Ok(Step::End);
            }
            WalletCharge::Charged {
                points_earned,
                became_vip,
                ..
            } => (points_earned, became_vip),
        };

        let order = Order::new(turn.user, session.cart.clone(), OrderStatus::Paid, None);
        let order_id = order.order_id.clone();
        if let Err(e) = self.db.orders.create(order).await {
            self.db.users.credit(turn.user, total).await?;
            return Err(e.into());
        }
        info!("User {} paid order {} ({}) from wallet", turn.user, order_id, total);

        self.say(
            turn,
            Msg::WalletPaid {
                order_id: order_id.clone(),
                points: points_earned,
            },
            Some(keyboards::main_menu(turn.lang)),
        )
        .await;
        if became_vip {
            self.say(turn, Msg::BecameVip, None).await;
        }
        self.notify_admins(|lang| {
            (
                Msg::AdminPaidOrder {
                    order_id: order_id.clone(),
                    user_id: turn.user,
                    total,
                },
                Some(keyboards::paid_order(lang, &order_id)),
            )
        })
        .await;
        Ok(Step::End)
    }

    pub(super) async fn cancel(&self, turn: Turn) -> Step {
        self.say(turn, Msg::Cancelled, Some(keyboards::main_menu(turn.lang)))
            .await;
        Step::End
    }
}
