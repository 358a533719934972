use super::{amount, cart_lines, Label, Msg};

pub(super) fn label(label: Label) -> &'static str {
    match label {
        Label::BuyNumber => "📱 خرید شماره مجازی",
        Label::BuyStars => "⭐ خرید استارز",
        Label::Cart => "🧾 سبد خرید",
        Label::Wallet => "💳 کیف‌پول / شارژ",
        Label::Profile => "👤 پروفایل",
        Label::About => "ℹ️ درباره ما",
        Label::Support => "🛠 پشتیبانی",
        Label::Language => "🌐 تغییر زبان",
        Label::Creator => "👨‍💻 سازنده",
        Label::Broadcast => "📣 خبر/اعلان",
        Label::ShopNumber => "📱 شماره مجازی",
        Label::ShopStars => "⭐ استارز",
        Label::ViewCart => "🧾 مشاهده سبد",
        Label::ContinueShopping => "📱 ادامه خرید",
        Label::Back => "🔙 بازگشت",
        Label::Checkout => "✅ نهایی‌سازی و پرداخت",
        Label::EmptyCart => "❌ خالی‌سازی سبد",
        Label::PayWallet => "💳 پرداخت با کیف‌پول",
        Label::PayManual => "📤 ارسال رسید و پرداخت دستی",
        Label::SendContact => "📲 ارسال شماره من",
        Label::Cancel => "❌ انصراف",
        Label::TopUp => "⬆️ شارژ کیف‌پول",
        Label::ShowBalance => "💰 مشاهده موجودی",
        Label::EditProfile => "✏️ ویرایش پروفایل",
        Label::ViewOrder => "📦 مشاهده سفارش",
        Label::ApproveOrder => "✅ تایید و تخصیص",
        Label::ApproveReceipt => "✅ تایید",
        Label::RejectReceipt => "❌ رد",
        Label::CreatorProfile => "👨‍💻 مشاهده پروفایل سازنده",
        Label::CreatorContact => "📩 تماس با سازنده",
    }
}

pub(super) fn text(msg: &Msg) -> String {
    match msg {
        Msg::Welcome => "👋 سلام! خوش آمدی به ربات.".into(),
        Msg::MainMenu => "منوی اصلی:".into(),
        Msg::BackToMainMenu => "بازگشت به منوی اصلی.".into(),
        Msg::UnknownCommand => "دستور نامشخص — از منو استفاده کن.".into(),
        Msg::Cancelled => "لغو شد.".into(),
        Msg::SomethingWentWrong => "⚠️ خطا در پردازش. دوباره تلاش کن.".into(),
        Msg::About => "🤖 این بات نسخهٔ پیشرفته است. برای پشتیبانی «🛠 پشتیبانی» را انتخاب کن.".into(),
        Msg::Creator => "✨ این ربات با عشق ساخته شده است.\n\n📞 برای سفارش بات مشابه یا شخصی‌سازی، به سازنده پیام بده 🌟".into(),

        Msg::ShopChooseType => "خرید: شماره یا استارز را انتخاب کن:".into(),
        Msg::ChooseCountry => "🌍 کشور شماره مجازی را انتخاب کن:".into(),
        Msg::PickCountryFromButtons => "لطفاً از دکمه‌ها یک کشور انتخاب کن.".into(),
        Msg::CountrySelected { country, price } => format!(
            "{} انتخاب شد. قیمت هر شماره: {}\n🔢 تعداد را وارد کن (عدد صحیح):",
            country,
            amount(*price)
        ),
        Msg::InvalidQuantity => "❌ تعداد نامعتبر. یک عدد صحیح مثبت وارد کن.".into(),
        Msg::AskStars => "چند استارز می‌خواهی؟ (مثال: 100)".into(),
        Msg::InvalidStars => "عدد نامعتبر. یک عدد صحیح وارد کن.".into(),
        Msg::CartAdded => "🧾 آیتم به سبد اضافه شد.".into(),
        Msg::CartEmpty => "🛒 سبد شما خالی است.".into(),
        Msg::CartView { items, total } => format!(
            "🧾 سبد خرید شما:\n{}\n\n💰 مجموع: {} تومان",
            cart_lines(items, "هر عدد"),
            amount(*total)
        ),
        Msg::CartCleared => "سبد خالی شد.".into(),
        Msg::ChoosePayment { total } => format!(
            "آیا می‌خواهی سفارش را نهایی کنی؟\n💰 مبلغ قابل پرداخت: {} تومان\nروش پرداخت را انتخاب کن:",
            amount(*total)
        ),
        Msg::WalletPaid { order_id, points } => format!(
            "پرداخت با کیف‌پول انجام شد. سفارش ثبت شد: {}\n🎯 امتیاز دریافتی: {}",
            order_id, points
        ),
        Msg::BecameVip => "👑 تبریک! شما اکنون مشتری VIP هستید.".into(),
        Msg::InsufficientBalance { balance, total } => format!(
            "موجودی کافی نیست ({} از {} تومان). لطفاً کیف‌پول را شارژ کن.",
            amount(*balance),
            amount(*total)
        ),
        Msg::SendContact => "📲 شماره خود را با دکمه زیر ارسال کن:".into(),

        Msg::CodeIssued { code } => format!("کد سفارش شما: {}", code),
        Msg::EnterCode => "⏰ کد ارسال شد. لطفاً وارد کن:".into(),
        Msg::InvalidCode => "❌ کد اشتباه یا منقضی شده.".into(),
        Msg::CodeExpired { code } => format!("کد قبلی منقضی شد. کد جدید: {}", code),
        Msg::OrderRegistered { order_id } => format!("🎉 سفارش ثبت شد! کد: {}", order_id),

        Msg::WalletMenu => "💼 منوی کیف پول:".into(),
        Msg::WalletBalance { amount: a } => format!("💰 موجودی: {} تومان", amount(*a)),
        Msg::ChooseTopupAmount => "مبلغ را انتخاب کن (تومان):".into(),
        Msg::InvalidAmount => "مقدار نامعتبر. یکی از گزینه‌ها را انتخاب کن.".into(),
        Msg::SendReceipt => "📸 لطفاً عکس فیش پرداخت را ارسال کن.".into(),
        Msg::ReceiptSentAdmin => "📤 رسید ارسال شد؛ پس از تایید، کیف‌پول شارژ می‌شود.".into(),
        Msg::ReceiptApproved { amount: a } => {
            format!("✅ رسید تایید شد؛ کیف‌پول شما {} تومان شارژ شد.", amount(*a))
        }
        Msg::ReceiptRejected => "❌ رسید رد شد.".into(),

        Msg::PhotoUnexpected => "عکس دریافت شد اما منتظر عکس نبودیم.".into(),
        Msg::PhotoNotAwaited => "در حال حاضر پذیرای عکس نیستیم.".into(),
        Msg::ContactNoSession => "ابتدا از منو گزینه‌ای انتخاب کن.".into(),
        Msg::ContactInvalid => "شماره معتبر فرستاده نشده.".into(),

        Msg::Profile(p) => format!(
            "👤 پروفایل شما:\nنام: {}\nنام خانوادگی: {}\nشماره: {}\nزبان: {}\nموجودی: {} تومان\nامتیاز: {}\nسطح: {}\nسفارش‌ها: {}",
            or_unset(&p.first_name),
            or_unset(&p.last_name),
            or_unset(&p.phone),
            p.language,
            amount(p.balance),
            p.points,
            if p.vip { "VIP" } else { "عادی" },
            p.orders
        ),
        Msg::EnterName => "✍️ لطفاً نام و نام خانوادگی را وارد کن:".into(),
        Msg::InvalidName => "لطفاً نام خود را به صورت متن بفرست.".into(),
        Msg::ProfileUpdated => "✅ پروفایل بروزرسانی شد.".into(),
        Msg::ChooseLanguage => "زبان را انتخاب کن:".into(),
        Msg::InvalidLanguage => "زبان نامعتبر.".into(),

        Msg::SupportPrompt => "🛠 لطفاً پیام پشتیبانی خود را ارسال کن:".into(),
        Msg::SupportSent => "پیام شما برای پشتیبانی ارسال شد.".into(),
        Msg::SupportForward { from, text } => format!("[پشتیبانی] از {}:\n{}", from, text),

        Msg::BroadcastPrompt => "متن پیامی که می‌خواهی برای همه ارسال کنی را ارسال کن:".into(),
        Msg::AdminOnly => "فقط ادمین می‌تواند این کار را انجام دهد.".into(),
        Msg::BroadcastBody { text } => format!("📣 اطلاعیه:\n\n{}", text),
        Msg::BroadcastReport { sent, failed } => {
            format!("ارسال شد: {} موفق / {} ناموفق", sent, failed)
        }

        Msg::AdminPaidOrder { order_id, user_id, total } => format!(
            "سفارش جدید پرداخت شده: {}\nکاربر: {}\nمجموع: {}",
            order_id,
            user_id,
            amount(*total)
        ),
        Msg::AdminPendingOrder { order_id, user_id, total } => format!(
            "📦 سفارش جدید {}\nکاربر: {}\nمجموع: {}",
            order_id,
            user_id,
            amount(*total)
        ),
        Msg::AdminNewReceipt { receipt_id, user_id, amount: a } => format!(
            "🧾 رسید جدید از کاربر {}\nمقدار: {} تومان\nایدی: {}",
            user_id,
            amount(*a),
            receipt_id
        ),
        Msg::OrderDetails { order_id, details } => {
            format!("جزئیات سفارش {}:\n{}", order_id, details)
        }
        Msg::ReceiptNotFound => "رسید پیدا نشد.".into(),
        Msg::ReceiptApprovedAck => "رسید تایید شد.".into(),
        Msg::ReceiptRejectedAck => "رسید رد شد.".into(),
        Msg::ReceiptAlreadyResolved => "این رسید قبلاً بررسی شده است.".into(),
        Msg::CaptionApproved => "✅ تایید شد".into(),
        Msg::CaptionRejected => "❌ رد شد".into(),
        Msg::OrderNotFound => "سفارش پیدا نشد.".into(),
        Msg::OrderSentAck => "ارسال شد.".into(),
        Msg::OrderApprovedAck => "تأیید شد.".into(),
        Msg::OrderAlreadyApproved => "این سفارش قبلاً تایید شده است.".into(),
        Msg::OrderApprovedAdmin { order_id } => format!(
            "سفارش {} تایید شد. می‌توانید اختصاص دهید یا اطلاعات را به کاربر ارسال کنید.",
            order_id
        ),
        Msg::OrderApprovedUser { order_id } => format!(
            "سفارش شما {} تایید شد. پس از ارسال اطلاعات، پیام می‌آید.",
            order_id
        ),
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(ثبت نشده)"
    } else {
        value
    }
}
