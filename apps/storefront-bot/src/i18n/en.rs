use super::{amount, cart_lines, Label, Msg};

pub(super) fn label(label: Label) -> &'static str {
    match label {
        Label::BuyNumber => "📱 Buy virtual number",
        Label::BuyStars => "⭐ Buy stars",
        Label::Cart => "🧾 Cart",
        Label::Wallet => "💳 Wallet / Top-up",
        Label::Profile => "👤 Profile",
        Label::About => "ℹ️ About",
        Label::Support => "🛠 Support",
        Label::Language => "🌐 Change language",
        Label::Creator => "👨‍💻 Creator",
        Label::Broadcast => "📣 Announcement",
        Label::ShopNumber => "📱 Virtual number",
        Label::ShopStars => "⭐ Stars",
        Label::ViewCart => "🧾 View cart",
        Label::ContinueShopping => "📱 Continue shopping",
        Label::Back => "🔙 Back",
        Label::Checkout => "✅ Checkout",
        Label::EmptyCart => "❌ Empty cart",
        Label::PayWallet => "💳 Pay with wallet",
        Label::PayManual => "📤 Send receipt (manual payment)",
        Label::SendContact => "📲 Send my contact",
        Label::Cancel => "❌ Cancel",
        Label::TopUp => "⬆️ Top up wallet",
        Label::ShowBalance => "💰 Show balance",
        Label::EditProfile => "✏️ Edit profile",
        Label::ViewOrder => "📦 View order",
        Label::ApproveOrder => "✅ Approve & assign",
        Label::ApproveReceipt => "✅ Approve",
        Label::RejectReceipt => "❌ Reject",
        Label::CreatorProfile => "👨‍💻 Creator profile",
        Label::CreatorContact => "📩 Contact the creator",
    }
}

pub(super) fn text(msg: &Msg) -> String {
    match msg {
        Msg::Welcome => "👋 Welcome to the bot!".into(),
        Msg::MainMenu => "Main menu:".into(),
        Msg::BackToMainMenu => "Back to the main menu.".into(),
        Msg::UnknownCommand => "Unknown command. Please use the menu.".into(),
        Msg::Cancelled => "Cancelled.".into(),
        Msg::SomethingWentWrong => "⚠️ Something went wrong. Please try again.".into(),
        Msg::About => "🤖 This is the advanced edition of the shop bot. Use \"🛠 Support\" if you need help.".into(),
        Msg::Creator => "✨ This bot was built with love by its creator.\n\n📞 Message them to order a similar or customised bot 🌟".into(),

        Msg::ShopChooseType => "Shop: choose a virtual number or stars:".into(),
        Msg::ChooseCountry => "🌍 Choose virtual-number country:".into(),
        Msg::PickCountryFromButtons => "Please pick a country from the buttons.".into(),
        Msg::CountrySelected { country, price } => format!(
            "{} selected. Price per number: {}\n🔢 Enter quantity (integer):",
            country,
            amount(*price)
        ),
        Msg::InvalidQuantity => "❌ Invalid quantity. Enter a positive whole number.".into(),
        Msg::AskStars => "How many stars do you want? (e.g. 100)".into(),
        Msg::InvalidStars => "Invalid number. Enter a positive whole number.".into(),
        Msg::CartAdded => "🧾 Item added to cart.".into(),
        Msg::CartEmpty => "🛒 Your cart is empty.".into(),
        Msg::CartView { items, total } => format!(
            "🧾 Your cart:\n{}\n\n💰 Total: {} Toman",
            cart_lines(items, "each"),
            amount(*total)
        ),
        Msg::CartCleared => "Cart emptied.".into(),
        Msg::ChoosePayment { total } => format!(
            "Do you want to complete the checkout?\n💰 Payable: {} Toman\nChoose a payment method:",
            amount(*total)
        ),
        Msg::WalletPaid { order_id, points } => format!(
            "Paid from wallet. Order registered: {}\n🎯 Points earned: {}",
            order_id, points
        ),
        Msg::BecameVip => "👑 Congratulations, you are now a VIP customer!".into(),
        Msg::InsufficientBalance { balance, total } => format!(
            "Insufficient balance ({} of {} Toman). Please top up your wallet.",
            amount(*balance),
            amount(*total)
        ),
        Msg::SendContact => "📲 Please send your Telegram contact (button):".into(),

        Msg::CodeIssued { code } => format!("Your order code: {}", code),
        Msg::EnterCode => "⏰ Code sent. Please enter it:".into(),
        Msg::InvalidCode => "❌ Code invalid or expired.".into(),
        Msg::CodeExpired { code } => format!("The previous code expired. New code: {}", code),
        Msg::OrderRegistered { order_id } => format!("🎉 Order registered! ID: {}", order_id),

        Msg::WalletMenu => "💼 Wallet menu:".into(),
        Msg::WalletBalance { amount: a } => format!("💰 Balance: {} Toman", amount(*a)),
        Msg::ChooseTopupAmount => "Choose an amount (Toman):".into(),
        Msg::InvalidAmount => "Invalid amount. Pick one of the options.".into(),
        Msg::SendReceipt => "📸 Please send payment receipt photo.".into(),
        Msg::ReceiptSentAdmin => "📤 Receipt sent for review.".into(),
        Msg::ReceiptApproved { amount: a } => {
            format!("✅ Receipt approved; wallet credited {} Toman.", amount(*a))
        }
        Msg::ReceiptRejected => "❌ Receipt rejected.".into(),

        Msg::PhotoUnexpected => "Photo received, but we were not expecting one.".into(),
        Msg::PhotoNotAwaited => "We are not accepting photos right now.".into(),
        Msg::ContactNoSession => "Please choose an option from the menu first.".into(),
        Msg::ContactInvalid => "No valid phone number was sent.".into(),

        Msg::Profile(p) => format!(
            "👤 Your profile:\nFirst name: {}\nLast name: {}\nPhone: {}\nLanguage: {}\nBalance: {} Toman\nPoints: {}\nTier: {}\nOrders: {}",
            or_unset(&p.first_name),
            or_unset(&p.last_name),
            or_unset(&p.phone),
            p.language,
            amount(p.balance),
            p.points,
            if p.vip { "VIP" } else { "Regular" },
            p.orders
        ),
        Msg::EnterName => "✍️ Please enter your full name:".into(),
        Msg::InvalidName => "Please send your name as text.".into(),
        Msg::ProfileUpdated => "✅ Profile updated.".into(),
        Msg::ChooseLanguage => "Choose a language:".into(),
        Msg::InvalidLanguage => "Invalid language.".into(),

        Msg::SupportPrompt => "🛠 Please send your support message:".into(),
        Msg::SupportSent => "Your support message was sent.".into(),
        Msg::SupportForward { from, text } => format!("[Support] From {}:\n{}", from, text),

        Msg::BroadcastPrompt => "Send the message you want to broadcast to everyone:".into(),
        Msg::AdminOnly => "Only admins can do this.".into(),
        Msg::BroadcastBody { text } => format!("📣 Broadcast:\n\n{}", text),
        Msg::BroadcastReport { sent, failed } => {
            format!("Sent: {} succeeded / {} failed", sent, failed)
        }

        Msg::AdminPaidOrder { order_id, user_id, total } => format!(
            "New paid order: {}\nUser: {}\nTotal: {}",
            order_id,
            user_id,
            amount(*total)
        ),
        Msg::AdminPendingOrder { order_id, user_id, total } => format!(
            "📦 New order {}\nUser: {}\nTotal: {}",
            order_id,
            user_id,
            amount(*total)
        ),
        Msg::AdminNewReceipt { receipt_id, user_id, amount: a } => format!(
            "🧾 New receipt from user {}\nAmount: {} Toman\nID: {}",
            user_id,
            amount(*a),
            receipt_id
        ),
        Msg::OrderDetails { order_id, details } => {
            format!("Order {} details:\n{}", order_id, details)
        }
        Msg::ReceiptNotFound => "Receipt not found.".into(),
        Msg::ReceiptApprovedAck => "Receipt approved.".into(),
        Msg::ReceiptRejectedAck => "Receipt rejected.".into(),
        Msg::ReceiptAlreadyResolved => "This receipt was already handled.".into(),
        Msg::CaptionApproved => "✅ Approved".into(),
        Msg::CaptionRejected => "❌ Rejected".into(),
        Msg::OrderNotFound => "Order not found.".into(),
        Msg::OrderSentAck => "Sent.".into(),
        Msg::OrderApprovedAck => "Approved.".into(),
        Msg::OrderAlreadyApproved => "This order was already approved.".into(),
        Msg::OrderApprovedAdmin { order_id } => format!(
            "Order {} approved. You can now assign it or send the details to the user.",
            order_id
        ),
        Msg::OrderApprovedUser { order_id } => format!(
            "Your order {} was approved. You will get a message once the details are sent.",
            order_id
        ),
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}
