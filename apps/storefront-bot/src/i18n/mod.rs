//! Localized texts. Every message key carries its own parameters, so a key can
//! never be rendered with missing or misspelled placeholders.

mod ar;
mod en;
mod fa;

use storefront_db::models::CartItem;
use storefront_shared::catalog::format_amount;
pub use storefront_shared::Lang;

/// What the profile screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub language: Lang,
    pub balance: u64,
    pub points: u64,
    pub vip: bool,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Welcome,
    MainMenu,
    BackToMainMenu,
    UnknownCommand,
    Cancelled,
    SomethingWentWrong,
    About,
    Creator,

    ShopChooseType,
    ChooseCountry,
    PickCountryFromButtons,
    CountrySelected { country: String, price: u64 },
    InvalidQuantity,
    AskStars,
    InvalidStars,
    CartAdded,
    CartEmpty,
    CartView { items: Vec<CartItem>, total: u64 },
    CartCleared,
    ChoosePayment { total: u64 },
    WalletPaid { order_id: String, points: u64 },
    BecameVip,
    InsufficientBalance { balance: u64, total: u64 },
    SendContact,

    CodeIssued { code: String },
    EnterCode,
    InvalidCode,
    CodeExpired { code: String },
    OrderRegistered { order_id: String },

    WalletMenu,
    WalletBalance { amount: u64 },
    ChooseTopupAmount,
    InvalidAmount,
    SendReceipt,
    ReceiptSentAdmin,
    ReceiptApproved { amount: u64 },
    ReceiptRejected,

    PhotoUnexpected,
    PhotoNotAwaited,
    ContactNoSession,
    ContactInvalid,

    Profile(ProfileCard),
    EnterName,
    InvalidName,
    ProfileUpdated,
    ChooseLanguage,
    InvalidLanguage,

    SupportPrompt,
    SupportSent,
    SupportForward { from: i64, text: String },

    BroadcastPrompt,
    AdminOnly,
    BroadcastBody { text: String },
    BroadcastReport { sent: u32, failed: u32 },

    AdminPaidOrder { order_id: String, user_id: i64, total: u64 },
    AdminPendingOrder { order_id: String, user_id: i64, total: u64 },
    AdminNewReceipt { receipt_id: String, user_id: i64, amount: u64 },
    OrderDetails { order_id: String, details: String },
    ReceiptNotFound,
    ReceiptApprovedAck,
    ReceiptRejectedAck,
    ReceiptAlreadyResolved,
    CaptionApproved,
    CaptionRejected,
    OrderNotFound,
    OrderSentAck,
    OrderApprovedAck,
    OrderAlreadyApproved,
    OrderApprovedAdmin { order_id: String },
    OrderApprovedUser { order_id: String },
}

/// Button captions. Incoming text is matched against the caption in every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    BuyNumber,
    BuyStars,
    Cart,
    Wallet,
    Profile,
    About,
    Support,
    Language,
    Creator,
    Broadcast,
    ShopNumber,
    ShopStars,
    ViewCart,
    ContinueShopping,
    Back,
    Checkout,
    EmptyCart,
    PayWallet,
    PayManual,
    SendContact,
    Cancel,
    TopUp,
    ShowBalance,
    EditProfile,
    ViewOrder,
    ApproveOrder,
    ApproveReceipt,
    RejectReceipt,
    CreatorProfile,
    CreatorContact,
}

impl Label {
    pub const ALL: [Label; 30] = [
        Label::BuyNumber,
        Label::BuyStars,
        Label::Cart,
        Label::Wallet,
        Label::Profile,
        Label::About,
        Label::Support,
        Label::Language,
        Label::Creator,
        Label::Broadcast,
        Label::ShopNumber,
        Label::ShopStars,
        Label::ViewCart,
        Label::ContinueShopping,
        Label::Back,
        Label::Checkout,
        Label::EmptyCart,
        Label::PayWallet,
        Label::PayManual,
        Label::SendContact,
        Label::Cancel,
        Label::TopUp,
        Label::ShowBalance,
        Label::EditProfile,
        Label::ViewOrder,
        Label::ApproveOrder,
        Label::ApproveReceipt,
        Label::RejectReceipt,
        Label::CreatorProfile,
        Label::CreatorContact,
    ];

    pub fn parse(text: &str) -> Option<Label> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|l| Lang::ALL.into_iter().any(|lang| label(lang, *l) == text))
    }
}

pub fn tr(lang: Lang, msg: &Msg) -> String {
    match lang {
        Lang::Fa => fa::text(msg),
        Lang::En => en::text(msg),
        Lang::Ar => ar::text(msg),
    }
}

pub fn label(lang: Lang, label: Label) -> &'static str {
    match lang {
        Lang::Fa => fa::label(label),
        Lang::En => en::label(label),
        Lang::Ar => ar::label(label),
    }
}

fn amount(n: u64) -> String {
    format_amount(n)
}

/// One numbered line per cart item, `each` being the localized "per unit" word.
fn cart_lines(items: &[CartItem], each: &str) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            CartItem::Number { country, price, qty } => {
                format!("{}. {} × {} — {} {}", i + 1, country, qty, amount(*price), each)
            }
            CartItem::Stars { price, qty } => {
                format!("{}. ⭐ {} × {}", i + 1, qty, amount(*price))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
