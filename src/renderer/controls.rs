use crate::math::Vec3;
use crate::scene::Scene;

/// Interactive edits, independent of any particular windowing backend.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    NextSphere,
    MoveSphere(Vec3),
    MoveLight(Vec3),
    Quit,
}

/// The scene currently shown plus which sphere the move keys act on.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    pub scene: Scene,
    pub selected: usize,
}

impl SceneState {
    pub fn new(scene: Scene) -> Self {
        SceneState { scene, selected: 0 }
    }

    /// Applies `action`, swapping in the new scene. Returns false once the user asked to quit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::NextSphere => {
                let count = self.scene.spheres().len();
                self.selected = if count == 0 {
                    0
                } else {
                    (self.selected + 1) % count
                };
            }
            Action::MoveSphere(offset) => {
                self.scene = self.scene.sphere_move(self.selected, offset);
            }
            Action::MoveLight(offset) => {
                self.scene = self.scene.light_move(offset);
            }
            Action::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn test_selection_wraps() {
        let mut state = SceneState::new(Scene::demo(100, 100));
        for expected in [1, 2, 0, 1] {
            assert!(state.apply(Action::NextSphere));
            assert_eq!(state.selected, expected);
        }
    }

    #[test]
    fn test_move_selected_sphere_only() {
        let before = Scene::demo(100, 100);
        let mut state = SceneState::new(before.clone());
        state.apply(Action::NextSphere);
        state.apply(Action::MoveSphere(Vec3::new(0.0, -1.0, 0.0)));

        let spheres = state.scene.spheres();
        assert_eq!(spheres[0], before.spheres()[0]);
        assert_eq!(spheres[1].origin(), Point3::new(50.0, 49.0, 50.0));
        assert_eq!(spheres[2], before.spheres()[2]);
        assert_eq!(state.scene.light(), before.light());
    }

    #[test]
    fn test_move_light_and_quit() {
        let mut state = SceneState::new(Scene::demo(100, 100));
        assert!(state.apply(Action::MoveLight(Vec3::new(1.0, 0.0, 0.0))));
        assert_eq!(state.scene.light().origin(), Point3::new(1.0, 0.0, 50.0));
        assert!(!state.apply(Action::Quit));
    }

    #[test]
    fn test_no_spheres() {
        let scene = Scene::new(
            crate::geometry::Sphere::new(Point3::ZERO, 1.0),
            Vec::new(),
            Vec::new(),
            Vec3::ZERO,
        );
        let mut state = SceneState::new(scene.clone());
        state.apply(Action::NextSphere);
        state.apply(Action::MoveSphere(Vec3::X));
        assert_eq!(state.selected, 0);
        assert_eq!(state.scene, scene);
    }
}
