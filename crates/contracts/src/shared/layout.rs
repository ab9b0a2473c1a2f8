//! Политика раскладки диалога настроек.
//!
//! Чистое отображение `(is_mobile, is_wide) → LayoutDirectives`. Определены все четыре
//! комбинации; `is_mobile && is_wide` при стандартных брейкпоинтах невозможна и
//! разрешается по тем же правилам: mobile задаёт рамку и вертикальные отступы,
//! wide задаёт ширину сайдбара, подписи и заголовок.

use super::config::Orientation;

/// Внешняя рамка контейнера табов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    pub width: &'static str,
    pub height: &'static str,
    pub margin_y: &'static str,
}

/// Сайдбар со списком табов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarStyle {
    pub flex: &'static str,
    pub padding_top: &'static str,
    pub padding_bottom: &'static str,
    pub padding_right: &'static str,
}

/// Область активной панели
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub margin_top: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDirectives {
    pub frame: FrameStyle,
    pub sidebar: SidebarStyle,
    pub panel: PanelStyle,
    pub show_heading: bool,
    pub show_labels: bool,
}

pub fn compute_layout(is_mobile: bool, is_wide: bool) -> LayoutDirectives {
    let frame = if is_mobile {
        FrameStyle {
            width: "100%",
            height: "100%",
            margin_y: "0",
        }
    } else {
        FrameStyle {
            width: "800px",
            height: "650px",
            margin_y: "-1rem",
        }
    };

    let padding_y = if is_mobile { "0.5rem" } else { "1rem" };
    let sidebar = SidebarStyle {
        flex: if is_wide { "0 0 16rem" } else { "0 0 4rem" },
        padding_top: match (is_wide, is_mobile) {
            (true, _) => padding_y,
            (false, true) => "0.5rem",
            (false, false) => "64px",
        },
        padding_bottom: padding_y,
        padding_right: match (is_wide, is_mobile) {
            (true, false) => "1.5rem",
            _ => "0.5rem",
        },
    };

    let panel = PanelStyle {
        margin_top: if !is_wide && is_mobile {
            "0.5rem"
        } else {
            "3.5rem"
        },
    };

    LayoutDirectives {
        frame,
        sidebar,
        panel,
        show_heading: is_wide,
        show_labels: is_wide,
    }
}

impl FrameStyle {
    /// Вертикальная полоса табов стоит слева от панели, горизонтальная над ней.
    pub fn to_css(&self, orientation: Orientation) -> String {
        let direction = match orientation {
            Orientation::Vertical => "row",
            Orientation::Horizontal => "column",
        };
        format!(
            "display: flex; flex-direction: {d}; flex-shrink: 0; overflow: hidden; \
             width: {w}; min-width: {w}; max-width: {w}; \
             height: {h}; min-height: {h}; max-height: {h}; \
             margin-top: {m}; margin-bottom: {m};",
            d = direction,
            w = self.width,
            h = self.height,
            m = self.margin_y,
        )
    }
}

impl SidebarStyle {
    pub fn to_css(&self, orientation: Orientation) -> String {
        match orientation {
            Orientation::Vertical => format!(
                "display: flex; flex-direction: column; \
                 border-right: 1px solid var(--settings-divider-color, lightgray); \
                 flex: {}; padding-top: {}; padding-bottom: {}; padding-right: {};",
                self.flex, self.padding_top, self.padding_bottom, self.padding_right,
            ),
            // Высота по содержимому.
            Orientation::Horizontal => format!(
                "display: flex; flex-direction: column; \
                 border-bottom: 1px solid var(--settings-divider-color, lightgray); \
                 flex: 0 0 auto; padding-top: {}; padding-bottom: {}; padding-right: {};",
                self.padding_top, self.padding_bottom, self.padding_right,
            ),
        }
    }
}

impl PanelStyle {
    pub fn to_css(&self) -> String {
        format!(
            "display: flex; flex-grow: 1; min-width: 0; overflow: auto; margin-top: {};",
            self.margin_top
        )
    }
}

/// Стиль списка табов внутри сайдбара.
pub fn tablist_css(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Vertical => "display: flex; flex-direction: column; gap: 0.25rem;",
        Orientation::Horizontal => {
            "display: flex; flex-direction: row; flex-wrap: wrap; gap: 0.25rem;"
        }
    }
}
