use backlog_domain::{Collection, Item, ItemId, ItemStatus, SearchQuery};

pub const COLUMN_COUNT: usize = 3;

/// In-memory projection of the active collection into one bucket per status,
/// plus the cursor and the search filter.
///
/// Buckets hold copies. Every mutation goes through the master collection by
/// id and is followed by [`BoardState::reorganize`].
#[derive(Debug, Clone)]
pub struct BoardState {
    collection: Collection,
    buckets: [Vec<Item>; COLUMN_COUNT],
    query: SearchQuery,
    selected_column: usize,
    cursor: usize,
}

impl BoardState {
    pub fn new(collection: Collection, start_column: usize) -> Self {
        let mut board = Self {
            collection,
            buckets: Default::default(),
            query: SearchQuery::default(),
            selected_column: start_column.min(COLUMN_COUNT - 1),
            cursor: 0,
        };
        board.reorganize();
        board
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Recomputes the buckets from the collection and the query, then clamps
    /// the cursor into the current bucket.
    pub fn reorganize(&mut self) {
        self.buckets = self.collection.partition_by_status(&self.query);
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.current_bucket().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    pub fn replace_collection(&mut self, collection: Collection) {
        self.collection = collection;
        self.reorganize();
    }

    pub fn replace(&mut self, item: Item) -> bool {
        let replaced = self.collection.replace(item);
        self.reorganize();
        replaced
    }

    pub fn push(&mut self, item: Item) {
        self.collection.push(item);
        self.reorganize();
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let removed = self.collection.remove(id);
        self.reorganize();
        removed
    }

    pub fn set_status(&mut self, id: &ItemId, status: ItemStatus) -> Option<Item> {
        let updated = self.collection.set_status(id, status);
        self.reorganize();
        updated
    }

    pub fn bucket(&self, column: usize) -> &[Item] {
        self.buckets.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn current_bucket(&self) -> &[Item] {
        self.bucket(self.selected_column)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.current_bucket().get(self.cursor)
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn selected_status(&self) -> ItemStatus {
        ItemStatus::from_column(self.selected_column).unwrap_or(ItemStatus::Todo)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn select_column(&mut self, column: usize) {
        self.selected_column = column.min(COLUMN_COUNT - 1);
        self.cursor = 0;
    }

    pub fn cycle_column_forward(&mut self) {
        self.select_column((self.selected_column + 1) % COLUMN_COUNT);
    }

    pub fn cycle_column_backward(&mut self) {
        self.select_column((self.selected_column + COLUMN_COUNT - 1) % COLUMN_COUNT);
    }

    pub fn column_left(&mut self) {
        if self.selected_column > 0 {
            self.select_column(self.selected_column - 1);
        }
    }

    pub fn column_right(&mut self) {
        if self.selected_column + 1 < COLUMN_COUNT {
            self.select_column(self.selected_column + 1);
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.current_bucket().len() {
            self.cursor += 1;
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: SearchQuery) {
        self.query = query;
        self.reorganize();
    }

    pub fn total_items(&self) -> usize {
        self.collection.len()
    }

    /// Visible item count per column, after filtering.
    pub fn column_counts(&self) -> [usize; COLUMN_COUNT] {
        [
            self.buckets[0].len(),
            self.buckets[1].len(),
            self.buckets[2].len(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backlog_domain::ItemDraft;

    fn item(title: &str, tags: &str, status: ItemStatus) -> Item {
        let mut item = Item::new(ItemDraft::parse(title, "", "", tags).unwrap());
        item.status = status;
        item
    }

    fn board() -> BoardState {
        BoardState::new(
            Collection::from_items(vec![
                item("Urgent fix", "", ItemStatus::Todo),
                item("Write docs", "", ItemStatus::Todo),
                item("Review", "URGENT", ItemStatus::InProgress),
                item("Ship", "", ItemStatus::Done),
            ]),
            0,
        )
    }

    #[test]
    fn test_empty_collection_has_empty_buckets() {
        let board = BoardState::new(Collection::new(), 1);
        assert_eq!(board.column_counts(), [0, 0, 0]);
        assert_eq!(board.selected_column(), 1);
        assert!(board.selected_item().is_none());
    }

    #[test]
    fn test_column_navigation() {
        let mut board = board();
        board.cursor_down();
        assert_eq!(board.cursor(), 1);

        board.cycle_column_backward();
        assert_eq!(board.selected_column(), 2);
        assert_eq!(board.cursor(), 0);
        board.cycle_column_forward();
        assert_eq!(board.selected_column(), 0);

        board.column_left();
        assert_eq!(board.selected_column(), 0);
        board.select_column(2);
        board.column_right();
        assert_eq!(board.selected_column(), 2);
    }

    #[test]
    fn test_cursor_stays_in_bucket() {
        let mut board = board();
        board.cursor_up();
        assert_eq!(board.cursor(), 0);
        board.cursor_down();
        board.cursor_down();
        board.cursor_down();
        assert_eq!(board.cursor(), 1);
        assert_eq!(board.selected_item().unwrap().title, "Write docs");
    }

    #[test]
    fn test_query_filters_and_clearing_restores() {
        let mut board = board();
        board.set_query(SearchQuery::new("urgent"));
        assert_eq!(board.column_counts(), [1, 1, 0]);
        assert_eq!(board.total_items(), 4);

        board.set_query(SearchQuery::default());
        assert_eq!(board.column_counts(), [2, 1, 1]);
    }

    #[test]
    fn test_removing_last_row_clamps_cursor() {
        let mut board = board();
        board.cursor_down();
        let id = board.selected_item().unwrap().id.clone();
        board.remove(&id);
        assert_eq!(board.cursor(), 0);

        let id = board.selected_item().unwrap().id.clone();
        board.remove(&id);
        assert_eq!(board.cursor(), 0);
        assert!(board.current_bucket().is_empty());
        assert!(board.selected_item().is_none());
    }

    #[test]
    fn test_set_status_moves_between_buckets() {
        let mut board = board();
        let id = board.selected_item().unwrap().id.clone();
        let moved = board.set_status(&id, ItemStatus::Done).unwrap();
        assert_eq!(moved.status, ItemStatus::Done);
        assert_eq!(board.column_counts(), [1, 1, 2]);
        // Collection order, not move order
        assert_eq!(board.bucket(2)[0].id, id);
        assert_eq!(board.bucket(2)[1].title, "Ship");
    }
}
