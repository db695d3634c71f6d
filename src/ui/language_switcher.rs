// SPDX-License-Identifier: MPL-2.0
//! Language switcher shown in the header.

use crate::domain::Locale;
use crate::i18n::Translator;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::pick_list;
use iced::{Element, Length};
use std::fmt;

/// Pick-list entry: a locale and its name in the current language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: Locale,
    pub label: String,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Selected(Locale),
}

/// Options in switcher order, labelled in the translator's language.
#[must_use]
pub fn options(translator: &Translator<'_>) -> Vec<LanguageOption> {
    Locale::ALL
        .into_iter()
        .map(|locale| LanguageOption {
            locale,
            label: translator.language_name(locale).to_string(),
        })
        .collect()
}

pub fn view<'a>(translator: Translator<'a>) -> Element<'a, Message> {
    let options = options(&translator);
    let selected = options
        .iter()
        .find(|opt| opt.locale == translator.locale())
        .cloned();

    pick_list(options, selected, |opt| Message::Selected(opt.locale))
        .text_size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SWITCHER_WIDTH))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn options_list_every_locale_in_order() {
        let i18n = I18n::load().expect("catalogs must load");
        let options = options(&i18n.translator(Locale::Hy));
        let locales: Vec<_> = options.iter().map(|o| o.locale).collect();
        assert_eq!(locales, Locale::ALL.to_vec());
        assert_eq!(options[1].label, "Հայերեն");
    }
}
