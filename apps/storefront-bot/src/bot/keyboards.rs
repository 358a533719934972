use storefront_shared::catalog::{format_amount, COUNTRIES, TOPUP_PRESETS};
use storefront_shared::{AdminAction, Lang};
use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    ReplyMarkup,
};

use crate::gateway::{GatewayError, InlineButton, Keyboard, ReplyButton};
use crate::i18n::{label, Label};

fn text_button(lang: Lang, l: Label) -> ReplyButton {
    ReplyButton::Text(label(lang, l).to_string())
}

fn rows(lang: Lang, layout: &[&[Label]]) -> Keyboard {
    Keyboard::reply(
        layout
            .iter()
            .map(|row| row.iter().map(|l| text_button(lang, *l)).collect())
            .collect(),
    )
}

pub fn main_menu(lang: Lang) -> Keyboard {
    rows(
        lang,
        &[
            &[Label::BuyNumber, Label::BuyStars],
            &[Label::Cart, Label::Wallet],
            &[Label::Profile, Label::About],
            &[Label::Support, Label::Language],
            &[Label::Creator, Label::Broadcast],
        ],
    )
}

pub fn shop_menu(lang: Lang) -> Keyboard {
    rows(
        lang,
        &[
            &[Label::ShopNumber, Label::ShopStars],
            &[Label::ViewCart, Label::Back],
        ],
    )
}

pub fn after_add(lang: Lang) -> Keyboard {
    rows(lang, &[&[Label::ContinueShopping, Label::ViewCart, Label::Back]])
}

/// One country per row, labelled `<flag name> — <price>` so the label prefix identifies it.
pub fn country_keyboard(lang: Lang) -> Keyboard {
    let mut grid: Vec<Vec<ReplyButton>> = COUNTRIES
        .iter()
        .map(|c| vec![ReplyButton::Text(format!("{} — {}", c.label, format_amount(c.price)))])
        .collect();
    grid.push(vec![text_button(lang, Label::Back)]);
    Keyboard::reply(grid)
}

pub fn quantity_keyboard(lang: Lang) -> Keyboard {
    Keyboard::reply(vec![
        (1..=3).map(|n| ReplyButton::Text(n.to_string())).collect(),
        vec![text_button(lang, Label::Back)],
    ])
}

pub fn cart_review(lang: Lang) -> Keyboard {
    rows(lang, &[&[Label::Checkout, Label::EmptyCart], &[Label::Back]])
}

pub fn payment_methods(lang: Lang) -> Keyboard {
    rows(lang, &[&[Label::PayWallet, Label::PayManual], &[Label::Back]])
}

pub fn contact_request(lang: Lang) -> Keyboard {
    Keyboard::Reply {
        rows: vec![
            vec![ReplyButton::RequestContact(label(lang, Label::SendContact).to_string())],
            vec![text_button(lang, Label::Cancel)],
        ],
        one_time: true,
    }
}

pub fn cancel_only(lang: Lang) -> Keyboard {
    rows(lang, &[&[Label::Cancel]])
}

pub fn back_only(lang: Lang) -> Keyboard {
    rows(lang, &[&[Label::Back]])
}

pub fn wallet_menu(lang: Lang) -> Keyboard {
    rows(lang, &[&[Label::TopUp, Label::ShowBalance, Label::Back]])
}

/// Preset amounts, three per row.
pub fn make_amount_keyboard(lang: Lang) -> Keyboard {
    let mut grid: Vec<Vec<ReplyButton>> = TOPUP_PRESETS
        .chunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .map(|amt| ReplyButton::Text(format_amount(*amt)))
                .collect()
        })
        .collect();
    grid.push(vec![text_button(lang, Label::Back)]);
    Keyboard::reply(grid)
}

pub fn profile_menu(lang: Lang) -> Keyboard {
    rows(lang, &[&[Label::EditProfile, Label::Language], &[Label::Back]])
}

pub fn language_keyboard(lang: Lang) -> Keyboard {
    Keyboard::reply(vec![
        Lang::ALL
            .into_iter()
            .map(|l| ReplyButton::Text(l.native_label().to_string()))
            .collect(),
        vec![text_button(lang, Label::Back)],
    ])
}

pub fn receipt_review(lang: Lang, receipt_id: &str) -> Keyboard {
    Keyboard::Inline(vec![
        vec![callback(
            lang,
            Label::ApproveReceipt,
            AdminAction::ApproveReceipt(receipt_id.to_string()),
        )],
        vec![callback(
            lang,
            Label::RejectReceipt,
            AdminAction::RejectReceipt(receipt_id.to_string()),
        )],
    ])
}

pub fn paid_order(lang: Lang, order_id: &str) -> Keyboard {
    Keyboard::Inline(vec![vec![callback(
        lang,
        Label::ViewOrder,
        AdminAction::ViewOrder(order_id.to_string()),
    )]])
}

pub fn pending_order(lang: Lang, order_id: &str) -> Keyboard {
    Keyboard::Inline(vec![
        vec![callback(lang, Label::ViewOrder, AdminAction::ViewOrder(order_id.to_string()))],
        vec![callback(
            lang,
            Label::ApproveOrder,
            AdminAction::ApproveOrder(order_id.to_string()),
        )],
    ])
}

pub fn creator_links(lang: Lang, url: &str) -> Keyboard {
    Keyboard::Inline(vec![vec![
        InlineButton::Url {
            label: label(lang, Label::CreatorProfile).to_string(),
            url: url.to_string(),
        },
        InlineButton::Url {
            label: label(lang, Label::CreatorContact).to_string(),
            url: url.to_string(),
        },
    ]])
}

fn callback(lang: Lang, l: Label, action: AdminAction) -> InlineButton {
    InlineButton::Callback {
        label: label(lang, l).to_string(),
        data: action.to_payload_string(),
    }
}

/// Converts a declarative keyboard into Telegram markup.
pub fn to_reply_markup(keyboard: &Keyboard) -> Result<ReplyMarkup, GatewayError> {
    let markup = match keyboard {
        Keyboard::Reply { rows, one_time } => {
            let buttons = rows.iter().map(|row| {
                row.iter()
                    .map(|b| match b {
                        ReplyButton::Text(text) => KeyboardButton::new(text.clone()),
                        ReplyButton::RequestContact(text) => {
                            KeyboardButton::new(text.clone()).request(ButtonRequest::Contact)
                        }
                    })
                    .collect::<Vec<_>>()
            });
            let mut markup = KeyboardMarkup::new(buttons).resize_keyboard();
            if *one_time {
                markup = markup.one_time_keyboard();
            }
            ReplyMarkup::Keyboard(markup)
        }
        Keyboard::Inline(rows) => {
            let mut grid = Vec::with_capacity(rows.len());
            for row in rows {
                let mut buttons = Vec::with_capacity(row.len());
                for b in row {
                    buttons.push(match b {
                        InlineButton::Callback { label, data } => {
                            InlineKeyboardButton::callback(label.clone(), data.clone())
                        }
                        InlineButton::Url { label, url } => {
                            let url = url::Url::parse(url)
                                .map_err(|e| GatewayError::Keyboard(format!("{}: {}", url, e)))?;
                            InlineKeyboardButton::url(label.clone(), url)
                        }
                    });
                }
                grid.push(buttons);
            }
            ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(grid))
        }
    };
    Ok(markup)
}
