use super::messages::Message;
use super::state::{App, PAGE_SCROLL_ID, SubmitStatus};
use crate::config::ThemeMode;
use crate::content;
use crate::section_map::{
    ABOUT_BODY_PX, CONTACT_FORM_PX, EDUCATION_EVENT_PX, HERO_MIN_HEIGHT_PX, PROJECT_CARD_PX,
    SECTION_HEADER_PX, SECTION_PADDING_PX, SKILL_COLUMN_MIN_PX, SKILL_ROW_PX,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, progress_bar, row, scrollable, text,
    text_input, vertical_space,
};
use iced::{Color, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body = scrollable(column![
            self.hero_section(),
            self.about_section(),
            self.skills_section(),
            self.education_section(),
            self.projects_section(),
            self.contact_section(),
            self.footer(),
        ])
        .on_scroll(|viewport| Message::Scrolled {
            offset: viewport.relative_offset(),
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .id(PAGE_SCROLL_ID.clone())
        .height(Length::Fill);

        let mut layout: Column<'_, Message> = column![self.header()];
        if self.nav.menu_open {
            layout = layout.push(self.menu_panel());
        }
        layout.push(body).into()
    }

    fn header(&self) -> Element<'_, Message> {
        let mut links = Row::new().spacing(4).align_y(Vertical::Center);
        for link in &content::SECTION_LINKS {
            let active = self.nav.tracker.active_section() == link.id;
            links = links.push(
                button(text(link.label).size(15))
                    .style(move |theme, status| {
                        if active {
                            button::primary(theme, status)
                        } else {
                            button::text(theme, status)
                        }
                    })
                    .on_press(Message::NavLinkClicked(link.id)),
            );
        }

        let theme_toggle = button(
            text(match self.config.theme {
                ThemeMode::Dark => "Light",
                ThemeMode::Light => "Dark",
            })
            .size(15),
        )
        .style(button::text)
        .on_press(Message::ToggleTheme);

        let menu_toggle = button(text(if self.nav.menu_open { "Close" } else { "Menu" }).size(15))
            .style(button::text)
            .on_press(Message::ToggleMenu);

        let bar = row![
            text(content::AUTHOR).size(20),
            horizontal_space(),
            links,
            theme_toggle,
            menu_toggle,
        ]
        .spacing(16)
        .padding([12, 24])
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let progress = progress_bar(0.0..=100.0, self.nav.tracker.progress())
            .height(Length::Fixed(3.0));

        let solid = self.nav.tracker.scrolled();
        container(column![bar, progress])
            .width(Length::Fill)
            .style(move |theme| {
                if solid {
                    container::bordered_box(theme)
                } else {
                    container::transparent(theme)
                }
            })
            .into()
    }

    fn menu_panel(&self) -> Element<'_, Message> {
        let mut links = Column::new().spacing(4).padding([8, 24]);
        for link in &content::SECTION_LINKS {
            links = links.push(
                button(text(link.label).size(16))
                    .style(button::text)
                    .width(Length::Fill)
                    .on_press(Message::NavLinkClicked(link.id)),
            );
        }
        container(links)
            .width(Length::Fill)
            .style(container::bordered_box)
            .into()
    }

    fn hero_section(&self) -> Element<'_, Message> {
        let mut socials = Row::new().spacing(12);
        for social in &content::SOCIAL_LINKS {
            socials = socials.push(text(format!("{} · {}", social.name, social.url)).size(13));
        }

        let inner = column![
            text(content::AUTHOR).size(44),
            text(content::TAGLINE).size(18),
            socials,
        ]
        .spacing(16)
        .align_x(Horizontal::Center);

        container(inner)
            .width(Length::Fill)
            .height(Length::Fixed(
                self.config.window_height.max(HERO_MIN_HEIGHT_PX),
            ))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    fn about_section(&self) -> Element<'_, Message> {
        column![
            Self::section_header("About"),
            container(text(content::ABOUT_TEXT).size(16))
                .padding([0, 24])
                .height(Length::Fixed(ABOUT_BODY_PX)),
            Self::section_spacer(),
        ]
        .into()
    }

    fn skills_section(&self) -> Element<'_, Message> {
        let columns = (self.config.window_width / SKILL_COLUMN_MIN_PX)
            .floor()
            .max(1.0) as usize;

        let mut grid = Column::new().spacing(8).padding([0, 24]);
        for chunk in content::SKILLS.chunks(columns) {
            let mut badges = Row::new().spacing(8);
            for skill in chunk {
                let (r, g, b) = skill.rgb;
                badges = badges.push(
                    container(text(skill.name).size(15).color(Color::from_rgb8(r, g, b)))
                        .padding(12)
                        .width(Length::FillPortion(1))
                        .height(Length::Fixed(SKILL_ROW_PX - 8.0))
                        .style(container::rounded_box),
                );
            }
            grid = grid.push(badges);
        }

        column![
            Self::section_header("Skills"),
            grid,
            Self::section_spacer(),
        ]
        .into()
    }

    fn education_section(&self) -> Element<'_, Message> {
        let mut timeline = Column::new();
        for event in &content::EDUCATION_EVENTS {
            timeline = timeline.push(
                container(
                    row![
                        text(event.year.to_string())
                            .size(22)
                            .width(Length::Fixed(80.0)),
                        column![
                            text(event.title).size(18),
                            text(event.description).size(15),
                            text(event.details).size(14),
                        ]
                        .spacing(4),
                    ]
                    .spacing(16),
                )
                .height(Length::Fixed(EDUCATION_EVENT_PX))
                .padding([8, 24]),
            );
        }

        column![
            Self::section_header("Experience"),
            timeline,
            Self::section_spacer(),
        ]
        .into()
    }

    fn projects_section(&self) -> Element<'_, Message> {
        let mut cards = Column::new().spacing(12).padding([0, 24]);
        for project in &content::PROJECTS {
            let mut tags = Row::new().spacing(8);
            for tag in project.tags {
                tags = tags.push(
                    container(text(*tag).size(12))
                        .padding([2, 8])
                        .style(container::rounded_box),
                );
            }

            let title = Row::new()
                .push(text(project.title).size(20))
                .push(horizontal_space())
                .push_maybe(project.featured.then(|| text("Featured").size(12)))
                .align_y(Vertical::Center);

            cards = cards.push(
                container(
                    column![
                        title,
                        text(project.description).size(15),
                        tags,
                        text(project.repo_url).size(13),
                        text(project.demo_url).size(13),
                    ]
                    .spacing(8),
                )
                .padding(16)
                .width(Length::Fill)
                .height(Length::Fixed(PROJECT_CARD_PX - 12.0))
                .style(container::bordered_box),
            );
        }

        column![
            Self::section_header("Projects"),
            cards,
            Self::section_spacer(),
        ]
        .into()
    }

    fn contact_section(&self) -> Element<'_, Message> {
        let info = column![
            text(content::CONTACT_LOCATION).size(15),
            text(content::CONTACT_EMAIL).size(15),
            text(content::CONTACT_PHONE).size(15),
        ]
        .spacing(6)
        .width(Length::FillPortion(1));

        let sending = matches!(self.contact.status, SubmitStatus::Sending { .. });
        let submit = button(text(if sending { "Sending..." } else { "Send Message" }).size(15))
            .style(button::primary)
            .on_press_maybe((!sending).then_some(Message::ContactSubmitted));

        let banner: Option<Element<'_, Message>> = match &self.contact.status {
            SubmitStatus::Succeeded { .. } => Some(
                text("Thanks! Your message has been sent.")
                    .size(14)
                    .style(text::success)
                    .into(),
            ),
            SubmitStatus::Failed { reason } => Some(
                text(reason.as_str()).size(14).style(text::danger).into(),
            ),
            _ => None,
        };

        let form = Column::new()
            .push(
                text_input("Your name", &self.contact.name)
                    .on_input(Message::ContactNameChanged)
                    .padding(10),
            )
            .push(
                text_input("Your email", &self.contact.email)
                    .on_input(Message::ContactEmailChanged)
                    .padding(10),
            )
            .push(
                text_input("Your message", &self.contact.message)
                    .on_input(Message::ContactMessageChanged)
                    .on_submit(Message::ContactSubmitted)
                    .padding(10),
            )
            .push(submit)
            .push_maybe(banner)
            .spacing(12)
            .width(Length::FillPortion(2));

        column![
            Self::section_header("Contact"),
            container(row![info, form].spacing(24))
                .padding([0, 24])
                .height(Length::Fixed(CONTACT_FORM_PX)),
            Self::section_spacer(),
        ]
        .into()
    }

    fn footer(&self) -> Element<'_, Message> {
        container(text(format!("© {}. Built with Rust.", content::AUTHOR)).size(13))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(24)
            .into()
    }

    fn section_header(title: &'static str) -> Element<'static, Message> {
        container(text(title).size(28))
            .padding([16, 24])
            .height(Length::Fixed(SECTION_HEADER_PX))
            .into()
    }

    fn section_spacer() -> Element<'static, Message> {
        vertical_space()
            .height(Length::Fixed(SECTION_PADDING_PX))
            .into()
    }
}
