use iced::{
    Alignment::Center,
    Color, Element, Theme, border,
    widget::{button, center, column, container, container::Style, opaque, stack, text},
};
use iced_widget::container::bordered_box;

/// The theme background at half brightness.
fn dimmed_background(theme: &Theme) -> Color {
    let background = theme.palette().background;
    Color {
        r: background.r * 0.5,
        g: background.g * 0.5,
        b: background.b * 0.5,
        ..background
    }
}

/// Card background; dimmed while the card is being dragged.
pub fn card_style(dragging: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme);
        if dragging {
            style.background(dimmed_background(theme))
        } else {
            style
        }
    }
}

/// List background; tinted with the primary color while a drop is possible.
pub fn drop_zone_style(droppable: bool) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme).border(border::width(2));
        if droppable {
            let primary = theme.palette().primary;
            style
                .background(Color { a: 0.25, ..primary })
                .border(border::width(2).color(primary))
        } else {
            style
        }
    }
}

/// Overlays a blocking alert on top of `base` until `on_dismiss` fires.
pub fn alert<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    message: &str,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let dialog = container(
        column![
            text("Alert").size(20),
            text(message.to_string()),
            button("OK").on_press(on_dismiss),
        ]
        .spacing(12)
        .align_x(Center),
    )
    .padding(20)
    .style(bordered_box);

    stack![
        base.into(),
        opaque(center(opaque(dialog)).style(|_theme: &Theme| Style {
            background: Some(
                Color {
                    a: 0.7,
                    ..Color::BLACK
                }
                .into()
            ),
            ..Style::default()
        })),
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimmed_background_halves_color_channels() {
        let theme = Theme::Light;
        let background = theme.palette().background;

        let dimmed = dimmed_background(&theme);

        assert_eq!(dimmed.r, background.r * 0.5);
        assert_eq!(dimmed.g, background.g * 0.5);
        assert_eq!(dimmed.b, background.b * 0.5);
        assert_eq!(dimmed.a, background.a);
    }
}
