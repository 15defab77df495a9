use crate::menu::MenuIcon;

pub(crate) const HOME: &[u8] =
    include_bytes!("../../../../assets/svg/home.svg");
pub(crate) const USERS: &[u8] =
    include_bytes!("../../../../assets/svg/users.svg");
pub(crate) const TRENDING_UP: &[u8] =
    include_bytes!("../../../../assets/svg/trending-up.svg");
pub(crate) const CALENDAR: &[u8] =
    include_bytes!("../../../../assets/svg/calendar.svg");
pub(crate) const DOLLAR_SIGN: &[u8] =
    include_bytes!("../../../../assets/svg/dollar-sign.svg");
pub(crate) const USER_PLUS: &[u8] =
    include_bytes!("../../../../assets/svg/user-plus.svg");
pub(crate) const BOOK_OPEN: &[u8] =
    include_bytes!("../../../../assets/svg/book-open.svg");
pub(crate) const BELL: &[u8] =
    include_bytes!("../../../../assets/svg/bell.svg");
pub(crate) const MENU: &[u8] =
    include_bytes!("../../../../assets/svg/menu.svg");
pub(crate) const X: &[u8] =
    include_bytes!("../../../../assets/svg/x.svg");
pub(crate) const HELP_CIRCLE: &[u8] =
    include_bytes!("../../../../assets/svg/help-circle.svg");
pub(crate) const LOG_OUT: &[u8] =
    include_bytes!("../../../../assets/svg/log-out.svg");
pub(crate) const CHEVRON_LEFT: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-left.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-right.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-down.svg");
pub(crate) const CHEVRON_UP: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-up.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../../../../assets/svg/settings.svg");
pub(crate) const AWARD: &[u8] =
    include_bytes!("../../../../assets/svg/award.svg");
pub(crate) const BAR_CHART_3: &[u8] =
    include_bytes!("../../../../assets/svg/bar-chart-3.svg");
pub(crate) const CLOCK: &[u8] =
    include_bytes!("../../../../assets/svg/clock.svg");
pub(crate) const CREDIT_CARD: &[u8] =
    include_bytes!("../../../../assets/svg/credit-card.svg");
pub(crate) const FILE_TEXT: &[u8] =
    include_bytes!("../../../../assets/svg/file-text.svg");
pub(crate) const CALCULATOR: &[u8] =
    include_bytes!("../../../../assets/svg/calculator.svg");
pub(crate) const BRIEFCASE: &[u8] =
    include_bytes!("../../../../assets/svg/briefcase.svg");
pub(crate) const SEARCH: &[u8] =
    include_bytes!("../../../../assets/svg/search.svg");
pub(crate) const GRADUATION_CAP: &[u8] =
    include_bytes!("../../../../assets/svg/graduation-cap.svg");
pub(crate) const TARGET: &[u8] =
    include_bytes!("../../../../assets/svg/target.svg");
pub(crate) const ALERT_CIRCLE: &[u8] =
    include_bytes!("../../../../assets/svg/alert-circle.svg");
pub(crate) const MAIL: &[u8] =
    include_bytes!("../../../../assets/svg/mail.svg");
pub(crate) const USER: &[u8] =
    include_bytes!("../../../../assets/svg/user.svg");
pub(crate) const SHIELD: &[u8] =
    include_bytes!("../../../../assets/svg/shield.svg");
pub(crate) const PALETTE: &[u8] =
    include_bytes!("../../../../assets/svg/palette.svg");
pub(crate) const GLOBE: &[u8] =
    include_bytes!("../../../../assets/svg/globe.svg");
pub(crate) const DATABASE: &[u8] =
    include_bytes!("../../../../assets/svg/database.svg");
pub(crate) const LOGO: &[u8] =
    include_bytes!("../../../../assets/logo/logo.png");

/// Resolve a menu icon to its embedded SVG.
pub(crate) fn menu_icon(icon: MenuIcon) -> &'static [u8] {
    match icon {
        MenuIcon::AlertCircle => ALERT_CIRCLE,
        MenuIcon::Award => AWARD,
        MenuIcon::BarChart3 => BAR_CHART_3,
        MenuIcon::Bell => BELL,
        MenuIcon::BookOpen => BOOK_OPEN,
        MenuIcon::Briefcase => BRIEFCASE,
        MenuIcon::Calculator => CALCULATOR,
        MenuIcon::Calendar => CALENDAR,
        MenuIcon::Clock => CLOCK,
        MenuIcon::CreditCard => CREDIT_CARD,
        MenuIcon::Database => DATABASE,
        MenuIcon::DollarSign => DOLLAR_SIGN,
        MenuIcon::FileText => FILE_TEXT,
        MenuIcon::Globe => GLOBE,
        MenuIcon::GraduationCap => GRADUATION_CAP,
        MenuIcon::Home => HOME,
        MenuIcon::Mail => MAIL,
        MenuIcon::Palette => PALETTE,
        MenuIcon::Search => SEARCH,
        MenuIcon::Settings => SETTINGS,
        MenuIcon::Shield => SHIELD,
        MenuIcon::Target => TARGET,
        MenuIcon::TrendingUp => TRENDING_UP,
        MenuIcon::User => USER,
        MenuIcon::UserPlus => USER_PLUS,
        MenuIcon::Users => USERS,
    }
}
