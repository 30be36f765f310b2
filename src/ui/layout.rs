use ratatui::layout::Rect;

/// Height of the form block: four field rows plus a status line, bordered.
const FORM_HEIGHT: u16 = 7;

/// Split the frame into header, form, results, and footer regions.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let form_height = FORM_HEIGHT.min(
        area.height
            .saturating_sub(header_height + footer_height),
    );

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let form = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: form_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let results = Rect {
        x: area.x,
        y: area.y + header_height + form_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + form_height + footer_height),
    };
    (header, form, results, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_frame() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (header, form, results, footer) = layout_regions(area);
        assert_eq!(header.height + form.height + results.height + footer.height, 24);
        assert_eq!(form.y, header.height);
        assert_eq!(results.y, header.height + form.height);
        assert_eq!(footer.y, 24 - footer.height);
    }

    #[test]
    fn degrades_gracefully_on_tiny_terminals() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 4,
        };
        let (header, form, results, footer) = layout_regions(area);
        assert!(header.height + form.height + results.height + footer.height <= 4);
    }
}
