use listview_widgets::prelude::*;

fn catalog() -> Vec<DefaultItem> {
    let mut items = Vec::new();
    for i in 1..=40 {
        let tag = match i % 3 {
            0 => "rust",
            1 => "go",
            _ => "web",
        };
        items.push(DefaultItem::new(
            format!("Package {i}\nversion {i}.0"),
            [tag],
        ));
    }
    items
}

fn visible_pages(list: &ListViewController<DefaultItem>) -> Vec<usize> {
    (0..list.items().len())
        .filter_map(|i| list.item_state(i).and_then(|s| s.page))
        .collect()
}

#[test]
fn visibility_matches_filters_and_search() {
    let mut list = ListViewController::new(catalog(), FilterSet::from_categories(["rust", "go", "web"]));
    list.toggle_filter("web").unwrap();
    list.set_search("PACKAGE 1");
    list.update_filterables();

    for (index, item) in list.items().iter().enumerate() {
        let expected = (item.has_tag("rust") || item.has_tag("go"))
            && item.search_line().contains("package 1");
        let state = list.item_state(index).unwrap();
        assert_eq!(state.page.is_some(), expected, "item {index}");
    }
}

#[test]
fn search_does_not_see_second_title_line() {
    let mut list = ListViewController::new(catalog(), FilterSet::from_categories(["rust", "go", "web"]));
    list.set_search("version");
    list.update_filterables();
    assert_eq!(list.matched_count(), 0);
    assert_eq!(list.page_count(), 1);
}

#[test]
fn pages_are_buckets_of_ten_in_order() {
    let list = ListViewController::new(catalog(), FilterSet::from_categories(["rust", "go", "web"]));
    let pages = visible_pages(&list);
    assert_eq!(pages.len(), 40);
    assert!(pages.windows(2).all(|w| w[0] <= w[1]));
    for page in 1..=4 {
        assert_eq!(pages.iter().filter(|p| **p == page).count(), 10);
    }
    // 40 is a multiple of ten, so a fifth empty page is counted.
    assert_eq!(list.page_count(), 5);
}

#[test]
fn condensed_controls_across_many_pages() {
    let items: Vec<DefaultItem> = (0..95)
        .map(|i| DefaultItem::new(format!("Entry {i}"), ["all"]))
        .collect();
    let mut list = ListViewController::new(items, FilterSet::from_categories(["all"]));
    assert_eq!(list.page_count(), 10);

    list.set_page(5, None);
    assert_eq!(list.markup().to_string(), "Prev 1 … 4 [5] 6 … 10 Next");

    list.set_page(2, None);
    assert_eq!(list.markup().to_string(), "Prev 1 [2] 3 … 8 9 10 Next");

    list.set_page(10, None);
    assert_eq!(list.visible_items().count(), 5);
    assert_eq!(list.markup().to_string(), "Prev 1 2 3 … 8 9 [10] (Next)");
}

#[test]
fn filter_markers_drive_the_filter_set() {
    let filters: FilterSet = ["filter rust", "filter go disabled", "filter web disabled"]
        .into_iter()
        .map(|classes| Filter::from_class_list(&ClassList::from(classes)).unwrap())
        .collect();
    let list = ListViewController::new(catalog(), filters);
    assert_eq!(list.matched_count(), 13);
    assert!(list.visible_items().all(|i| i.has_tag("rust")));
    assert_eq!(
        list.filters().iter().map(|f| f.class_list().to_string()).collect::<Vec<_>>(),
        vec!["filter rust", "filter go disabled", "filter web disabled"]
    );
}

#[test]
fn every_region_gets_the_same_html() {
    let config = Config::from_toml_str("pagination_regions = 3").unwrap();
    let mut list = ListViewController::new(catalog(), FilterSet::from_categories(["go"]))
        .with_config(config)
        .unwrap();
    list.set_next_page();
    let regions = list.pagination_regions();
    assert_eq!(regions.len(), 3);
    assert!(regions.iter().all(|r| r == &regions[0]));
    assert!(regions[0].contains(r#"<li><a class="page active">2</a></li>"#));
    assert!(regions[0].contains(r#"onclick="setPreviousPage()""#));
}
