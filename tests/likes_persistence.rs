use tempfile::tempdir;

use mealplan::{JsonFileStore, LikedRecipe, Likes, LikesStore};

fn liked(id: &str, title: &str) -> LikedRecipe {
    LikedRecipe {
        id: id.to_string(),
        title: title.to_string(),
        author: "Test Kitchen".to_string(),
        image_url: String::new(),
    }
}

#[test]
fn test_likes_survive_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("likes.json");

    {
        let store = JsonFileStore::new(&path);
        let mut likes = Likes::new(Box::new(store)).unwrap();
        likes.add_like(liked("47746", "Deep Dish Pizza")).unwrap();
        likes.add_like(liked("35120", "Cauliflower Pizza")).unwrap();
    }

    // A fresh instance rehydrates from the same file.
    let likes = Likes::new(Box::new(JsonFileStore::new(&path))).unwrap();
    assert_eq!(likes.num_likes(), 2);
    assert!(likes.is_liked("47746"));
    assert!(likes.is_liked("35120"));

    let titles: Vec<&str> = likes.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["Deep Dish Pizza", "Cauliflower Pizza"]);
}

#[test]
fn test_every_mutation_rewrites_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("likes.json");
    let mut likes = Likes::new(Box::new(JsonFileStore::new(&path))).unwrap();

    likes.add_like(liked("1", "One")).unwrap();
    assert_eq!(JsonFileStore::new(&path).load().unwrap().len(), 1);

    likes.add_like(liked("2", "Two")).unwrap();
    assert_eq!(JsonFileStore::new(&path).load().unwrap().len(), 2);

    likes.delete_like("1").unwrap();
    let remaining = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "2");
}

#[test]
fn test_missing_file_loads_empty_set() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("does-not-exist.json"));
    assert!(store.load().unwrap().is_empty());

    let likes = Likes::new(Box::new(store)).unwrap();
    assert_eq!(likes.num_likes(), 0);
}

#[test]
fn test_store_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("likes.json");

    let store = JsonFileStore::new(&path);
    store.save(&[liked("1", "One")]).unwrap();
    assert!(path.exists());
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("likes.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(JsonFileStore::new(&path).load().is_err());
    assert!(Likes::new(Box::new(JsonFileStore::new(&path))).is_err());
}
