//! Render model derived from an [`Editor`] session.
//!
//! A [`ViewModel`] is a plain snapshot: building one never mutates the editor,
//! and presentation layers draw it without reaching back into core state.
use town_core::{Act, CellRect, Editor, EntityId, GridDimensions, Mode, Position, TypeId};

#[derive(Clone, Debug)]
pub struct ViewModel {
    pub header: HeaderView,
    pub palette: Vec<PaletteEntry>,
    pub map: MapView,
    pub roster: Vec<RosterRow>,
    pub summary: Vec<SummaryRow>,
    /// Shown only in play mode, and only while someone is talking.
    pub dialogue: Option<DialogueView>,
}

impl ViewModel {
    pub fn build(editor: &Editor) -> Self {
        Self {
            header: HeaderView::from_editor(editor),
            palette: palette(editor),
            map: MapView::from_editor(editor),
            roster: roster(editor),
            summary: summary(editor),
            dialogue: dialogue(editor),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub act: Act,
    pub mode: Mode,
    pub selected: TypeId,
    pub population: usize,
    /// Runtime position in play mode, configured start in build mode.
    pub player: Position,
    pub placing_player: bool,
}

impl HeaderView {
    fn from_editor(editor: &Editor) -> Self {
        Self {
            act: editor.current_act(),
            mode: editor.mode(),
            selected: editor.selected_type(),
            population: editor.population(),
            player: player_position(editor),
            placing_player: editor.is_placing_player(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub type_id: TypeId,
    /// Digit that selects this entry.
    pub hotkey: char,
    pub name: &'static str,
    pub color: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug)]
pub struct MapView {
    pub width: u32,
    pub height: u32,
    pub entities: Vec<EntityMarker>,
    pub player: Option<PlayerMarker>,
}

impl MapView {
    fn from_editor(editor: &Editor) -> Self {
        let grid = editor.grid();
        let entities = editor
            .current()
            .entities()
            .iter()
            .map(|entity| EntityMarker {
                id: entity.id,
                type_id: entity.type_id,
                position: entity.position,
                rect: grid.cell_rect(entity.position),
            })
            .collect();

        Self {
            width: grid.width,
            height: grid.height,
            entities,
            player: player_marker(editor, grid),
        }
    }

    pub fn marker_at(&self, position: Position) -> Option<&EntityMarker> {
        self.entities
            .iter()
            .find(|marker| marker.position == position)
    }
}

/// A placed entity with its screen-relative box, in percent of the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityMarker {
    pub id: EntityId,
    pub type_id: TypeId,
    pub position: Position,
    pub rect: CellRect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerMarker {
    pub position: Position,
    pub rect: CellRect,
    /// Build mode shows the start position faded.
    pub dimmed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterRow {
    pub id: EntityId,
    pub name: &'static str,
    pub position: Position,
    pub dialogue: String,
    pub is_custom: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub type_id: TypeId,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueView {
    pub speaker: &'static str,
    pub text: String,
}

fn player_position(editor: &Editor) -> Position {
    match editor.mode() {
        Mode::Build => editor.current().player_start,
        Mode::Play => editor.player().position,
    }
}

fn player_marker(editor: &Editor, grid: GridDimensions) -> Option<PlayerMarker> {
    if editor.mode() == Mode::Build && editor.is_placing_player() {
        return None;
    }
    let position = player_position(editor);
    Some(PlayerMarker {
        position,
        rect: grid.cell_rect(position),
        dimmed: editor.mode() == Mode::Build,
    })
}

fn palette(editor: &Editor) -> Vec<PaletteEntry> {
    TypeId::all()
        .zip('1'..='9')
        .map(|(type_id, hotkey)| {
            let entity_type = type_id.entity_type();
            PaletteEntry {
                type_id,
                hotkey,
                name: entity_type.name,
                color: entity_type.color,
                selected: type_id == editor.selected_type(),
            }
        })
        .collect()
}

fn roster(editor: &Editor) -> Vec<RosterRow> {
    editor
        .current()
        .entities()
        .iter()
        .map(|entity| RosterRow {
            id: entity.id,
            name: entity.name(),
            position: entity.position,
            dialogue: entity.effective_dialogue().to_string(),
            is_custom: entity.custom_dialogue.is_some(),
        })
        .collect()
}

fn summary(editor: &Editor) -> Vec<SummaryRow> {
    editor
        .type_summary()
        .into_iter()
        .map(|(type_id, count)| SummaryRow {
            type_id,
            name: type_id.name(),
            count,
        })
        .collect()
}

fn dialogue(editor: &Editor) -> Option<DialogueView> {
    if editor.mode() != Mode::Play {
        return None;
    }
    editor.player().dialogue.as_ref().map(|d| DialogueView {
        speaker: d.speaker,
        text: d.text.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use town_core::{Direction, EditorConfig};

    fn type_named(name: &str) -> TypeId {
        TypeId::from_name(name).unwrap()
    }

    fn editor() -> Editor {
        Editor::new(&EditorConfig::new().with_seed(5))
    }

    #[test]
    fn palette_marks_selection_and_hotkeys() {
        let mut editor = editor();
        editor.select_type(4).unwrap();

        let view = ViewModel::build(&editor);

        assert_eq!(view.palette.len(), TypeId::COUNT);
        assert_eq!(view.palette[0].hotkey, '1');
        assert_eq!(view.palette[8].hotkey, '9');
        let selected: Vec<_> = view.palette.iter().filter(|p| p.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Guard");
    }

    #[test]
    fn entity_markers_carry_percent_boxes() {
        let mut editor = editor();
        editor
            .place_or_replace(Position::new(10, 3), type_named("Knight"))
            .unwrap();

        let view = ViewModel::build(&editor);
        let marker = view.map.marker_at(Position::new(10, 3)).unwrap();

        assert_eq!(marker.rect.left, 25.0);
        assert_eq!(marker.rect.top, 20.0);
        assert_eq!(marker.rect.width, 2.5);
    }

    #[test]
    fn player_marker_is_dimmed_in_build_and_hidden_while_placing() {
        let mut editor = editor();
        editor.set_player_start(Position::new(2, 2)).unwrap();

        let marker = ViewModel::build(&editor).map.player.unwrap();
        assert!(marker.dimmed);
        assert_eq!(marker.position, Position::new(2, 2));

        editor.toggle_placing_player();
        assert!(ViewModel::build(&editor).map.player.is_none());

        editor.toggle_placing_player();
        editor.set_mode(Mode::Play);
        editor.move_player(Direction::Right).unwrap();
        let marker = ViewModel::build(&editor).map.player.unwrap();
        assert!(!marker.dimmed);
        assert_eq!(marker.position, Position::new(3, 2));
    }

    #[test]
    fn roster_shows_effective_dialogue() {
        let mut editor = editor();
        let (queen, _) = editor
            .place_or_replace(Position::new(1, 1), type_named("Queen"))
            .unwrap();
        editor
            .place_or_replace(Position::new(2, 1), type_named("Squire"))
            .unwrap();
        editor.set_custom_dialogue(queen, "").unwrap();

        let view = ViewModel::build(&editor);

        assert_eq!(view.roster.len(), 2);
        assert!(view.roster[0].is_custom);
        assert_eq!(
            view.roster[0].dialogue,
            type_named("Queen").entity_type().default_dialogue()
        );
        assert!(!view.roster[1].is_custom);
        assert_eq!(view.header.population, 2);
    }

    #[test]
    fn summary_follows_catalog_order() {
        let mut editor = editor();
        for (x, name) in [(0, "Assassin"), (1, "Knight"), (2, "Assassin")] {
            editor
                .place_or_replace(Position::new(x, 0), type_named(name))
                .unwrap();
        }

        let view = ViewModel::build(&editor);
        let rows: Vec<_> = view.summary.iter().map(|r| (r.name, r.count)).collect();
        assert_eq!(rows, vec![("Knight", 1), ("Assassin", 2)]);
    }

    #[test]
    fn dialogue_box_only_in_play_mode() {
        let mut editor = editor();
        editor
            .place_or_replace(Position::new(1, 0), type_named("Merchant"))
            .unwrap();
        editor.set_player_start(Position::new(1, 2)).unwrap();
        assert!(ViewModel::build(&editor).dialogue.is_none());

        editor.set_mode(Mode::Play);
        editor.move_player(Direction::Up).unwrap();
        let view = ViewModel::build(&editor);
        assert_eq!(view.dialogue.map(|d| d.speaker), Some("Merchant"));
        assert_eq!(view.header.mode, Mode::Play);
    }
}
