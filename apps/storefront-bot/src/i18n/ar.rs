use super::{amount, cart_lines, Label, Msg};

pub(super) fn label(label: Label) -> &'static str {
    match label {
        Label::BuyNumber => "📱 شراء رقم افتراضي",
        Label::BuyStars => "⭐ شراء النجوم",
        Label::Cart => "🧾 سلة التسوق",
        Label::Wallet => "💳 المحفظة / الشحن",
        Label::Profile => "👤 الملف الشخصي",
        Label::About => "ℹ️ من نحن",
        Label::Support => "🛠 الدعم",
        Label::Language => "🌐 تغيير اللغة",
        Label::Creator => "👨‍💻 المطور",
        Label::Broadcast => "📣 إعلان",
        Label::ShopNumber => "📱 رقم افتراضي",
        Label::ShopStars => "⭐ نجوم",
        Label::ViewCart => "🧾 عرض السلة",
        Label::ContinueShopping => "📱 متابعة التسوق",
        Label::Back => "🔙 رجوع",
        Label::Checkout => "✅ إتمام الطلب والدفع",
        Label::EmptyCart => "❌ إفراغ السلة",
        Label::PayWallet => "💳 الدفع من المحفظة",
        Label::PayManual => "📤 إرسال إيصال ودفع يدوي",
        Label::SendContact => "📲 إرسال رقمي",
        Label::Cancel => "❌ إلغاء",
        Label::TopUp => "⬆️ شحن المحفظة",
        Label::ShowBalance => "💰 عرض الرصيد",
        Label::EditProfile => "✏️ تعديل الملف الشخصي",
        Label::ViewOrder => "📦 عرض الطلب",
        Label::ApproveOrder => "✅ موافقة وتخصيص",
        Label::ApproveReceipt => "✅ موافقة",
        Label::RejectReceipt => "❌ رفض",
        Label::CreatorProfile => "👨‍💻 ملف المطور",
        Label::CreatorContact => "📩 التواصل مع المطور",
    }
}

pub(super) fn text(msg: &Msg) -> String {
    match msg {
        Msg::Welcome => "👋 مرحباً بك في البوت!".into(),
        Msg::MainMenu => "القائمة الرئيسية:".into(),
        Msg::BackToMainMenu => "العودة إلى القائمة الرئيسية.".into(),
        Msg::UnknownCommand => "أمر غير معروف، استخدم القائمة.".into(),
        Msg::Cancelled => "تم الإلغاء.".into(),
        Msg::SomethingWentWrong => "⚠️ حدث خطأ. حاول مرة أخرى.".into(),
        Msg::About => "🤖 هذه هي النسخة المتقدمة من بوت المتجر. اختر «🛠 الدعم» للمساعدة.".into(),
        Msg::Creator => "✨ تم بناء هذا البوت بحب.\n\n📞 راسل المطور لطلب بوت مشابه أو مخصص 🌟".into(),

        Msg::ShopChooseType => "الشراء: اختر رقماً افتراضياً أو نجوماً:".into(),
        Msg::ChooseCountry => "🌍 اختر دولة الرقم الافتراضي:".into(),
        Msg::PickCountryFromButtons => "الرجاء اختيار دولة من الأزرار.".into(),
        Msg::CountrySelected { country, price } => format!(
            "تم اختيار {}. سعر الرقم الواحد: {}\n🔢 أدخل الكمية (عدد صحيح):",
            country,
            amount(*price)
        ),
        Msg::InvalidQuantity => "❌ كمية غير صالحة. أدخل عدداً صحيحاً موجباً.".into(),
        Msg::AskStars => "كم نجمة تريد؟ (مثال: 100)".into(),
        Msg::InvalidStars => "رقم غير صالح. أدخل عدداً صحيحاً.".into(),
        Msg::CartAdded => "🧾 تم إضافة العنصر للسلة.".into(),
        Msg::CartEmpty => "🛒 سلتك فارغة.".into(),
        Msg::CartView { items, total } => format!(
            "🧾 سلتك:\n{}\n\n💰 المجموع: {} تومان",
            cart_lines(items, "للواحد"),
            amount(*total)
        ),
        Msg::CartCleared => "تم إفراغ السلة.".into(),
        Msg::ChoosePayment { total } => format!(
            "هل تريد إنهاء الطلب؟\n💰 المبلغ المستحق: {} تومان\nاختر طريقة الدفع:",
            amount(*total)
        ),
        Msg::WalletPaid { order_id, points } => format!(
            "تم الدفع من المحفظة. تم تسجيل الطلب: {}\n🎯 النقاط المكتسبة: {}",
            order_id, points
        ),
        Msg::BecameVip => "👑 تهانينا، أصبحت عميلاً مميزاً (VIP)!".into(),
        Msg::InsufficientBalance { balance, total } => format!(
            "الرصيد غير كافٍ ({} من {} تومان). الرجاء شحن المحفظة.",
            amount(*balance),
            amount(*total)
        ),
        Msg::SendContact => "📲 الرجاء إرسال جهة اتصال تلغرام (زر):".into(),

        Msg::CodeIssued { code } => format!("رمز طلبك: {}", code),
        Msg::EnterCode => "⏰ تم إرسال الرمز. الرجاء إدخاله:".into(),
        Msg::InvalidCode => "❌ الرمز غير صالح أو منتهي.".into(),
        Msg::CodeExpired { code } => format!("انتهت صلاحية الرمز السابق. الرمز الجديد: {}", code),
        Msg::OrderRegistered { order_id } => format!("🎉 تم تسجيل الطلب! رقم: {}", order_id),

        Msg::WalletMenu => "💼 قائمة المحفظة:".into(),
        Msg::WalletBalance { amount: a } => format!("💰 الرصيد: {} تومان", amount(*a)),
        Msg::ChooseTopupAmount => "اختر المبلغ (تومان):".into(),
        Msg::InvalidAmount => "مبلغ غير صالح. اختر أحد الخيارات.".into(),
        Msg::SendReceipt => "📸 الرجاء إرسال إيصال الدفع صورة.".into(),
        Msg::ReceiptSentAdmin => "📤 تم إرسال الإيصال للمراجعة.".into(),
        Msg::ReceiptApproved { amount: a } => {
            format!("✅ تم الموافقة؛ تم شحن المحفظة بمقدار {} تومان.", amount(*a))
        }
        Msg::ReceiptRejected => "❌ تم رفض الإيصال.".into(),

        Msg::PhotoUnexpected => "تم استلام الصورة لكننا لم نكن ننتظر صورة.".into(),
        Msg::PhotoNotAwaited => "لا نستقبل الصور حالياً.".into(),
        Msg::ContactNoSession => "الرجاء اختيار خيار من القائمة أولاً.".into(),
        Msg::ContactInvalid => "لم يتم إرسال رقم صالح.".into(),

        Msg::Profile(p) => format!(
            "👤 ملفك الشخصي:\nالاسم: {}\nاسم العائلة: {}\nالهاتف: {}\nاللغة: {}\nالرصيد: {} تومان\nالنقاط: {}\nالمستوى: {}\nالطلبات: {}",
            or_unset(&p.first_name),
            or_unset(&p.last_name),
            or_unset(&p.phone),
            p.language,
            amount(p.balance),
            p.points,
            if p.vip { "VIP" } else { "عادي" },
            p.orders
        ),
        Msg::EnterName => "✍️ الرجاء إدخال اسمك الكامل:".into(),
        Msg::InvalidName => "الرجاء إرسال اسمك كنص.".into(),
        Msg::ProfileUpdated => "✅ تم تحديث الملف الشخصي.".into(),
        Msg::ChooseLanguage => "اختر اللغة:".into(),
        Msg::InvalidLanguage => "لغة غير صالحة.".into(),

        Msg::SupportPrompt => "🛠 أرسل رسالة الدعم:".into(),
        Msg::SupportSent => "تم إرسال رسالتك للدعم.".into(),
        Msg::SupportForward { from, text } => format!("[الدعم] من {}:\n{}", from, text),

        Msg::BroadcastPrompt => "أرسل الرسالة التي تريد بثها للجميع:".into(),
        Msg::AdminOnly => "هذا الإجراء للمشرفين فقط.".into(),
        Msg::BroadcastBody { text } => format!("📣 إعلان:\n\n{}", text),
        Msg::BroadcastReport { sent, failed } => {
            format!("تم الإرسال: {} ناجح / {} فاشل", sent, failed)
        }

        Msg::AdminPaidOrder { order_id, user_id, total } => format!(
            "طلب جديد مدفوع: {}\nالمستخدم: {}\nالمجموع: {}",
            order_id,
            user_id,
            amount(*total)
        ),
        Msg::AdminPendingOrder { order_id, user_id, total } => format!(
            "📦 طلب جديد {}\nالمستخدم: {}\nالمجموع: {}",
            order_id,
            user_id,
            amount(*total)
        ),
        Msg::AdminNewReceipt { receipt_id, user_id, amount: a } => format!(
            "🧾 إيصال جديد من المستخدم {}\nالمبلغ: {} تومان\nالمعرف: {}",
            user_id,
            amount(*a),
            receipt_id
        ),
        Msg::OrderDetails { order_id, details } => {
            format!("تفاصيل الطلب {}:\n{}", order_id, details)
        }
        Msg::ReceiptNotFound => "الإيصال غير موجود.".into(),
        Msg::ReceiptApprovedAck => "تمت الموافقة على الإيصال.".into(),
        Msg::ReceiptRejectedAck => "تم رفض الإيصال.".into(),
        Msg::ReceiptAlreadyResolved => "تمت معالجة هذا الإيصال مسبقاً.".into(),
        Msg::CaptionApproved => "✅ تمت الموافقة".into(),
        Msg::CaptionRejected => "❌ تم الرفض".into(),
        Msg::OrderNotFound => "الطلب غير موجود.".into(),
        Msg::OrderSentAck => "تم الإرسال.".into(),
        Msg::OrderApprovedAck => "تمت الموافقة.".into(),
        Msg::OrderAlreadyApproved => "تمت الموافقة على هذا الطلب مسبقاً.".into(),
        Msg::OrderApprovedAdmin { order_id } => format!(
            "تمت الموافقة على الطلب {}. يمكنك الآن تخصيصه أو إرسال التفاصيل للمستخدم.",
            order_id
        ),
        Msg::OrderApprovedUser { order_id } => format!(
            "تمت الموافقة على طلبك {}. ستصلك رسالة بعد إرسال التفاصيل.",
            order_id
        ),
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(غير مسجل)"
    } else {
        value
    }
}
